//! # Favicon 打包模块
//!
//! 将多个小尺寸帧打包进单个 ICO 容器。帧按 `FAVICON_SIZES` 顺序写入（最小帧在前），
//! 每帧以 PNG 压缩存储，目录表声明全部尺寸。

use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use super::pipeline::resize_square;
use super::source::SourceImage;
use super::{IconError, IconGenerator, ResampleFilter};

impl IconGenerator {
    pub(crate) fn render_favicon(
        &self,
        source: &SourceImage,
        sizes: &[u32],
    ) -> Result<Vec<u8>, IconError> {
        build_favicon(source, sizes, self.config.resize_filter)
    }
}

/// 生成多分辨率 ICO 文件内容。
pub fn build_favicon(
    source: &SourceImage,
    sizes: &[u32],
    filter: ResampleFilter,
) -> Result<Vec<u8>, IconError> {
    if sizes.is_empty() {
        return Err(IconError::ResourceLimit("favicon 至少需要一个尺寸".to_string()));
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if size > 256 {
            return Err(IconError::ResourceLimit(format!(
                "ICO 帧尺寸超出上限：{}（最大 256）",
                size
            )));
        }

        let resized = resize_square(source, size, filter)?;
        let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| IconError::Encode(format!("ICO 帧编码失败（{}px）：{}", size, e)))?;
        log::debug!("🧩 favicon 帧 {}x{}", size, size);
        frames.push(frame);
    }

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .map_err(|e| IconError::Encode(format!("ICO 编码失败：{}", e)))?;

    Ok(bytes)
}
