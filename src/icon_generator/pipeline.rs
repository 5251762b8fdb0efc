//! # 缩放与导出流水线模块
//!
//! ## 设计思路
//!
//! 每次缩放都是无状态操作：只读共享源图，输出一个新的正方形 RGBA 缓冲。
//! 因此任意顺序（乃至并行）执行整个目录都会得到相同的文件。
//!
//! ## 实现思路
//!
//! 1. `fast_image_resize` 卷积缩放（默认 Lanczos3）
//! 2. 失败时回退 `image::resize_exact`
//! 3. PNG 编码到内存
//! 4. 创建父目录后一次性写盘

use fast_image_resize as fr;
use fast_image_resize::IntoImageView;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::source::SourceImage;
use super::{IconError, IconGenerator, ResampleFilter};

impl IconGenerator {
    /// 按当前配置的滤镜缩放到 `size × size`。
    pub(crate) fn render(&self, source: &SourceImage, size: u32) -> Result<RgbaImage, IconError> {
        resize_square(source, size, self.config.resize_filter)
    }

    /// 缩放、编码并写入单个 PNG，返回编码后的字节供复用。
    pub(crate) fn export_icon(
        &self,
        source: &SourceImage,
        size: u32,
        path: &Path,
    ) -> Result<Vec<u8>, IconError> {
        let resized = self.render(source, size)?;
        let png = encode_png(&resized)?;
        write_file(path, &png)?;
        Ok(png)
    }
}

/// 将源图缩放为正方形。输出尺寸恒为 `size × size`。
pub fn resize_square(
    source: &SourceImage,
    size: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, IconError> {
    if size == 0 {
        return Err(IconError::ResourceLimit("目标尺寸不能为 0".to_string()));
    }

    match resize_with_fast_image_resize(&source.image, size, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                err
            );
            Ok(source
                .image
                .resize_exact(size, size, filter.to_image_filter())
                .to_rgba8())
        }
    }
}

fn resize_with_fast_image_resize(
    image: &DynamicImage,
    size: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, IconError> {
    let pixel_type = image
        .pixel_type()
        .ok_or_else(|| IconError::Decode("源图像素格式不受 fast_image_resize 支持".to_string()))?;

    let mut dst_image = fr::images::Image::new(size, size, pixel_type);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(filter.to_fast_alg());

    resizer
        .resize(image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(size, size, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

/// PNG 编码到内存。
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

/// 写文件，必要时创建父目录。已存在的文件会被覆盖。
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            IconError::FileSystem(format!("创建目录失败（{}）：{}", parent.display(), e))
        })?;
    }

    std::fs::write(path, bytes)
        .map_err(|e| IconError::FileSystem(format!("写入文件失败（{}）：{}", path.display(), e)))
}
