//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `GeneratorConfig`，保证运行时行为可观测、可测试。
//! 生产环境只使用 `Default`（路径、滤镜、品牌信息均为编译期常量），
//! 测试则通过 `for_project_root` 指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 以当前工作目录为项目根，对应 `public/logo.png` → `public/icons`。
//! - `ResampleFilter` 作为高层语义，同时映射到 `image` 与 `fast_image_resize` 的滤镜。
//! - `BrandProfile` 承载清单与 HTML 片段中的品牌常量。

use fast_image_resize as fr;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::IconError;

/// 源图相对项目根的位置。
pub const SOURCE_LOGO: &str = "public/logo.png";
/// 图标输出目录相对项目根的位置。
pub const OUTPUT_DIR: &str = "public/icons";
/// Web 清单文件名（位于输出目录的上一级）。
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源 logo 路径。
    pub source_path: PathBuf,
    /// 图标输出根目录。
    pub output_dir: PathBuf,
    /// 重采样滤镜。
    pub resize_filter: ResampleFilter,
    /// 源图像素上限（`width * height`），在完整解码前按 header 尺寸校验。
    pub max_source_pixels: u64,
    /// 品牌信息。
    pub brand: BrandProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_project_root(".")
    }
}

impl GeneratorConfig {
    /// 以指定目录作为项目根构建配置，其余参数取默认值。
    pub fn for_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source_path: root.join(SOURCE_LOGO),
            output_dir: root.join(OUTPUT_DIR),
            resize_filter: ResampleFilter::default(),
            max_source_pixels: 64_000_000,
            brand: BrandProfile::default(),
        }
    }

    /// Web 清单输出路径：输出目录的上一级。
    pub fn manifest_path(&self) -> PathBuf {
        match self.output_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(MANIFEST_FILE_NAME),
            _ => self.output_dir.join("..").join(MANIFEST_FILE_NAME),
        }
    }
}

/// 重采样滤镜档位。
///
/// - `Lanczos3`：默认，高质量面积平均
/// - `CatmullRom`：略锐利
/// - `Bilinear`：速度优先
/// - `Nearest`：仅用于调试像素对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Bilinear,
    Nearest,
}

impl FromStr for ResampleFilter {
    type Err = IconError;

    /// 从外部字符串解析滤镜。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use logo_generator::icon_generator::ResampleFilter;
    ///
    /// let filter: ResampleFilter = "catmull-rom".parse()?;
    /// assert_eq!(filter.as_str(), "catmull-rom");
    /// # Ok::<(), logo_generator::icon_generator::IconError>(())
    /// ```
    fn from_str(filter: &str) -> Result<Self, Self::Err> {
        match filter.trim().to_lowercase().as_str() {
            "lanczos3" => Ok(Self::Lanczos3),
            "catmull-rom" => Ok(Self::CatmullRom),
            "bilinear" => Ok(Self::Bilinear),
            "nearest" => Ok(Self::Nearest),
            other => Err(IconError::InvalidConfig(format!(
                "未知重采样滤镜：{}（可选：lanczos3 / catmull-rom / bilinear / nearest）",
                other
            ))),
        }
    }
}

impl ResampleFilter {
    /// 稳定字符串，用于日志输出与解析回读。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lanczos3 => "lanczos3",
            Self::CatmullRom => "catmull-rom",
            Self::Bilinear => "bilinear",
            Self::Nearest => "nearest",
        }
    }

    /// 回退路径使用的 `image` 滤镜。
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Bilinear => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }

    /// 主路径使用的 `fast_image_resize` 算法。
    pub(crate) fn to_fast_alg(self) -> fr::ResizeAlg {
        match self {
            Self::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
            Self::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            Self::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            Self::Nearest => fr::ResizeAlg::Nearest,
        }
    }
}

/// 品牌常量：Web 清单、Android 颜色资源与 HTML 片段共用。
#[derive(Debug, Clone)]
pub struct BrandProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub theme_color: &'static str,
    pub background_color: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    /// 图标在站点中的公开 URL 前缀（对应输出目录）。
    pub icon_url_prefix: &'static str,
    /// 清单在站点中的公开 URL。
    pub manifest_url: &'static str,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            name: "MediSync",
            short_name: "MediSync",
            description: "AI-Powered Conversational BI & Intelligent Accounting for Healthcare",
            theme_color: "#0056D2",
            background_color: "#FFFFFF",
            start_url: "/",
            display: "standalone",
            icon_url_prefix: "/icons",
            manifest_url: "/manifest.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_project_layout() {
        let config = GeneratorConfig::for_project_root("/srv/web");
        assert_eq!(config.source_path, Path::new("/srv/web/public/logo.png"));
        assert_eq!(config.output_dir, Path::new("/srv/web/public/icons"));
        assert_eq!(config.manifest_path(), Path::new("/srv/web/public/manifest.json"));
    }

    #[test]
    fn manifest_path_falls_back_to_parent_segment() {
        let mut config = GeneratorConfig::default();
        config.output_dir = PathBuf::from("icons");
        assert_eq!(config.manifest_path(), Path::new("icons/../manifest.json"));
    }

    #[test]
    fn filter_names_parse_back() {
        for filter in [
            ResampleFilter::Lanczos3,
            ResampleFilter::CatmullRom,
            ResampleFilter::Bilinear,
            ResampleFilter::Nearest,
        ] {
            assert_eq!(ResampleFilter::from_str(filter.as_str()).expect("parse"), filter);
        }
        let padded: ResampleFilter = " Bilinear ".parse().expect("parse");
        assert_eq!(padded, ResampleFilter::Bilinear);
    }

    #[test]
    fn unknown_filter_name_is_rejected() {
        let err = "bicubic".parse::<ResampleFilter>().err().expect("should fail");
        assert!(matches!(err, IconError::InvalidConfig(_)));
    }

    #[test]
    fn default_filter_is_lanczos() {
        let filter = ResampleFilter::default();
        assert_eq!(filter.as_str(), "lanczos3");
        assert_eq!(filter.to_image_filter(), FilterType::Lanczos3);
    }
}
