//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“输入图片”和“生成结果”解耦：
//! - `SourceImage` 表示已解码、已归一化为 RGBA 的源图
//! - `GeneratedAsset` 表示一次写盘的产物
//! - `GenerationReport` 汇总整次运行，供入口层打印摘要

use image::DynamicImage;
use std::path::PathBuf;
use std::time::Duration;

/// 加载阶段输出：RGBA 源图。
pub struct SourceImage {
    /// 始终为 `DynamicImage::ImageRgba8`。
    pub(crate) image: DynamicImage,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// 产物类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Png,
    Favicon,
    Json,
    Xml,
    Html,
}

/// 一个已写入磁盘的文件。
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    /// 相对输出根目录的路径（清单位于上一级，记为 `../manifest.json`）。
    pub relative_path: PathBuf,
    pub kind: AssetKind,
    /// 图片边长；元数据文件为 `None`。
    pub size: Option<u32>,
}

/// 整次运行的结果摘要。
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub assets: Vec<GeneratedAsset>,
    pub elapsed: Duration,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.assets.len()
    }

    pub fn count_of(&self, kind: AssetKind) -> usize {
        self.assets.iter().filter(|asset| asset.kind == kind).count()
    }

    pub(crate) fn push(
        &mut self,
        relative_path: impl Into<PathBuf>,
        kind: AssetKind,
        size: Option<u32>,
    ) {
        self.assets.push(GeneratedAsset {
            relative_path: relative_path.into(),
            kind,
            size,
        });
    }
}
