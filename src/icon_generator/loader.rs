//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：路径存在性检查发生在任何输出目录创建之前，
//! 因此源图缺失或损坏时磁盘上不会留下任何产物。
//!
//! ## 实现思路
//!
//! 1. 存在性检查（`SourceNotFound`）
//! 2. 读取字节
//! 3. 猜测格式并读取 header 尺寸，按像素上限快速拒绝
//! 4. 完整解码
//! 5. 归一化为 RGBA8

use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::Cursor;
use std::path::Path;

use super::source::SourceImage;
use super::{GeneratorConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 加载并归一化源图。
    pub(crate) fn load_source(&self) -> Result<SourceImage, IconError> {
        load_source(&self.config.source_path, &self.config)
    }
}

/// 从路径加载源图，校验通过后转换为 RGBA。
pub fn load_source(path: &Path, config: &GeneratorConfig) -> Result<SourceImage, IconError> {
    log::info!("📁 加载源图 - 路径: {}", path.display());

    if !path.exists() {
        return Err(IconError::SourceNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取源图：{}", e)))?;

    let (header_width, header_height) = inspect_dimensions(&bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::Decode(format!("源图尺寸无效：{}x{}", width, height)));
    }
    validate_pixel_limits(config, width, height)?;

    let color = decoded.color();
    let image = match decoded {
        rgba @ DynamicImage::ImageRgba8(_) => rgba,
        other => {
            log::debug!("🎨 颜色模式 {:?} -> Rgba8", color);
            DynamicImage::ImageRgba8(other.to_rgba8())
        }
    };

    log::info!("✅ 源图尺寸: {}x{}", width, height);
    if width != height {
        log::warn!(
            "⚠️ 源图不是正方形（{}x{}），输出将被拉伸为正方形",
            width,
            height
        );
    }

    Ok(SourceImage {
        image,
        width,
        height,
    })
}

/// 仅通过图片头信息读取宽高，用于在完整解码前做像素限制检查。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?;

    if reader.format().is_none() {
        return Err(IconError::Decode("无法识别图片格式".to_string()));
    }

    reader
        .into_dimensions()
        .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(
    config: &GeneratorConfig,
    width: u32,
    height: u32,
) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_source_pixels {
        return Err(IconError::ResourceLimit(format!(
            "源图像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_source_pixels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(tag: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("logo-generator-loader-{tag}-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_source_is_reported_before_reading() {
        let dir = unique_temp_dir("missing");
        let path = dir.join("nope.png");

        let err = load_source(&path, &GeneratorConfig::default()).err().expect("should fail");
        assert!(matches!(err, IconError::SourceNotFound(p) if p == path));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = unique_temp_dir("garbage");
        let path = dir.join("logo.png");
        std::fs::write(&path, b"definitely not an image").expect("write garbage");

        let err = load_source(&path, &GeneratorConfig::default()).err().expect("should fail");
        assert!(matches!(err, IconError::Decode(_)));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rgb_source_is_normalized_to_rgba() {
        let dir = unique_temp_dir("rgb");
        let path = dir.join("logo-rgb.png");
        let img = ImageBuffer::from_fn(40, 30, |x, y| Rgb([x as u8, y as u8, 128]));
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write rgb png");

        let source = load_source(&path, &GeneratorConfig::default()).expect("load rgb");
        assert_eq!((source.width(), source.height()), (40, 30));
        assert!(matches!(source.image, DynamicImage::ImageRgba8(_)));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn oversized_header_is_rejected() {
        let dir = unique_temp_dir("limit");
        let path = dir.join("logo.png");
        DynamicImage::new_rgba8(64, 64)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write png");

        let mut config = GeneratorConfig::default();
        config.max_source_pixels = 1_000;
        let err = load_source(&path, &config).err().expect("should fail");
        assert!(matches!(err, IconError::ResourceLimit(_)));

        let _ = std::fs::remove_dir_all(dir);
    }
}
