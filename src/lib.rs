//! # MediSync Logo 生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  public/logo.png                                         │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ run(&GeneratorConfig) -> 退出码
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (唯一错误边界)              │
//! │  │                                                       │
//! │  └─ icon_generator   图标生成                            │
//! │      ├─ catalog       尺寸目录 / iOS / Android / favicon  │
//! │      ├─ loader        存在性检查 · 解码 · RGBA            │
//! │      ├─ pipeline      缩放 · PNG 编码 · 写盘              │
//! │      ├─ favicon       多分辨率 ICO                        │
//! │      └─ metadata      Contents.json · XML · manifest      │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │  public/icons/**   public/manifest.json                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 应用级错误类型 `AppError` |
//! | [`icon_generator`] | 从单张源图生成全部尺寸图标与平台描述文件 |

pub mod error;
pub mod icon_generator;

use error::AppError;
use icon_generator::{GenerationReport, GeneratorConfig, IconGenerator};

/// 执行一次完整生成。
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, AppError> {
    let report = IconGenerator::new(config.clone()).generate()?;
    Ok(report)
}

/// 顶层错误边界：成功返回 0，源图缺失或任意失败返回 1。
///
/// 失败前已写入的文件保留在磁盘上。
pub fn run(config: &GeneratorConfig) -> u8 {
    match generate(config) {
        Ok(_) => {
            log::info!("🎉 所有尺寸的 logo 已生成完毕");
            0
        }
        Err(err) if err.is_source_missing() => {
            log::error!("❌ {}", err);
            1
        }
        Err(err) => {
            log::error!("❌ 生成 logo 失败: {}", err);
            1
        }
    }
}
