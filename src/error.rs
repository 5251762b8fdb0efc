//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，作为整次生成的唯一错误边界：
//! 源图缺失与生成过程中的任意失败都在这里汇合，由 `run` 统一记录并映射为退出码 1。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，`?` 即可上转。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 生成流水线错误（加载 / 缩放 / 写入）
    #[error("{0}")]
    Icon(#[from] IconError),
}

impl AppError {
    /// 是否为预检阶段的“源图不存在”。
    pub fn is_source_missing(&self) -> bool {
        matches!(self, Self::Icon(IconError::SourceNotFound(_)))
    }
}
