//! # 编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 仅负责“阶段顺序 + 阶段耗时日志 + 产物登记”，
//! 具体的加载、缩放、打包、模板渲染分别委托给子模块。
//!
//! ## 实现思路
//!
//! 阶段顺序固定：加载源图 → 尺寸目录 → iOS 图标集 → Android 资源 → favicon → 清单 → HTML 片段。
//! 任一阶段失败立即返回，已写入的文件保留在磁盘上（不回滚）。

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::catalog::{
    ANDROID_ADAPTIVE_DIR, ANDROID_ADAPTIVE_FILE, ANDROID_BUCKETS, ANDROID_COLORS_FILE, ANDROID_DIR,
    ANDROID_LAUNCHER, ANDROID_LAUNCHER_FOREGROUND, ANDROID_VALUES_DIR, FAVICON_FILE, FAVICON_SIZES,
    IOS_ICONSET, IOS_ICONSET_DIR, SIZE_CATALOG, SNIPPET_FILE,
};
use super::config::MANIFEST_FILE_NAME;
use super::metadata;
use super::pipeline::write_file;
use super::source::{AssetKind, GenerationReport, SourceImage};
use super::{GeneratorConfig, IconError};

/// 图标生成编排器。
pub struct IconGenerator {
    pub(crate) config: GeneratorConfig,
}

impl IconGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 执行完整生成流程。
    pub fn generate(&self) -> Result<GenerationReport, IconError> {
        let started = Instant::now();
        let mut report = GenerationReport::default();

        let stage = Instant::now();
        let source = self.load_source()?;
        log::debug!("⏱️ 加载源图耗时 {}ms", stage.elapsed().as_millis());

        // 输出目录在源图校验通过之后才创建
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| {
            IconError::FileSystem(format!("创建输出目录失败（{}）：{}", output_dir.display(), e))
        })?;

        self.timed("尺寸目录", || self.generate_catalog(&source, &mut report))?;
        self.timed("iOS 图标集", || self.generate_ios_iconset(&source, &mut report))?;
        self.timed("Android 资源", || self.generate_android(&source, &mut report))?;
        self.timed("favicon.ico", || self.generate_favicon(&source, &mut report))?;
        self.timed("Web 清单", || self.generate_manifest(&mut report))?;
        self.timed("HTML 片段", || self.generate_snippet(&mut report))?;

        report.elapsed = started.elapsed();
        log::info!(
            "📦 共生成 {} 个文件，输出目录: {}（{}ms）",
            report.file_count(),
            output_dir.display(),
            report.elapsed.as_millis()
        );

        Ok(report)
    }

    fn timed<F>(&self, stage: &str, run: F) -> Result<(), IconError>
    where
        F: FnOnce() -> Result<(), IconError>,
    {
        let started = Instant::now();
        run()?;
        log::debug!("⏱️ 阶段「{}」耗时 {}ms", stage, started.elapsed().as_millis());
        Ok(())
    }

    fn output_path(&self, relative: &Path) -> PathBuf {
        self.config.output_dir.join(relative)
    }

    fn generate_catalog(
        &self,
        source: &SourceImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        for entry in SIZE_CATALOG {
            self.export_icon(source, entry.size, &self.output_path(Path::new(entry.file_name)))?;
            log::info!("🖼️ 已生成: {} ({}x{})", entry.file_name, entry.size, entry.size);
            report.push(entry.file_name, AssetKind::Png, Some(entry.size));
        }
        Ok(())
    }

    fn generate_ios_iconset(
        &self,
        source: &SourceImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        let iconset = Path::new(IOS_ICONSET_DIR);

        for &(file_name, size) in IOS_ICONSET {
            let relative = iconset.join(file_name);
            self.export_icon(source, size, &self.output_path(&relative))?;
            log::info!("🍎 已生成 iOS: {} ({}x{})", file_name, size, size);
            report.push(relative, AssetKind::Png, Some(size));
        }

        let relative = iconset.join("Contents.json");
        write_file(&self.output_path(&relative), metadata::ios_contents_json()?.as_bytes())?;
        log::info!("🍎 已生成: {}", relative.display());
        report.push(relative, AssetKind::Json, None);
        Ok(())
    }

    fn generate_android(
        &self,
        source: &SourceImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        let android = Path::new(ANDROID_DIR);

        for &(bucket, size) in ANDROID_BUCKETS {
            let bucket_dir = android.join(bucket);

            let launcher = bucket_dir.join(ANDROID_LAUNCHER);
            let png = self.export_icon(source, size, &self.output_path(&launcher))?;
            report.push(launcher, AssetKind::Png, Some(size));

            // 前景层与启动图标内容一致
            let foreground = bucket_dir.join(ANDROID_LAUNCHER_FOREGROUND);
            write_file(&self.output_path(&foreground), &png)?;
            report.push(foreground, AssetKind::Png, Some(size));

            log::info!("🤖 已生成 Android: {} ({}x{})", bucket, size, size);
        }

        let adaptive = android.join(ANDROID_ADAPTIVE_DIR).join(ANDROID_ADAPTIVE_FILE);
        write_file(
            &self.output_path(&adaptive),
            metadata::android_adaptive_icon_xml().as_bytes(),
        )?;
        log::info!("🤖 已生成: Android 自适应图标 XML");
        report.push(adaptive, AssetKind::Xml, None);

        let colors = android.join(ANDROID_VALUES_DIR).join(ANDROID_COLORS_FILE);
        write_file(
            &self.output_path(&colors),
            metadata::android_colors_xml(&self.config.brand).as_bytes(),
        )?;
        log::info!("🤖 已生成: Android colors.xml");
        report.push(colors, AssetKind::Xml, None);
        Ok(())
    }

    fn generate_favicon(
        &self,
        source: &SourceImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        let bytes = self.render_favicon(source, FAVICON_SIZES)?;
        write_file(&self.output_path(Path::new(FAVICON_FILE)), &bytes)?;
        log::info!("⭐ 已生成: {}（包含 {:?}）", FAVICON_FILE, FAVICON_SIZES);
        report.push(FAVICON_FILE, AssetKind::Favicon, None);
        Ok(())
    }

    fn generate_manifest(&self, report: &mut GenerationReport) -> Result<(), IconError> {
        let manifest_path = self.config.manifest_path();
        write_file(
            &manifest_path,
            metadata::web_manifest_json(&self.config.brand)?.as_bytes(),
        )?;
        log::info!("🌐 已生成: {}", manifest_path.display());
        report.push(Path::new("..").join(MANIFEST_FILE_NAME), AssetKind::Json, None);
        Ok(())
    }

    fn generate_snippet(&self, report: &mut GenerationReport) -> Result<(), IconError> {
        let html = metadata::favicon_snippet_html(&self.config.brand)?;
        write_file(&self.output_path(Path::new(SNIPPET_FILE)), html.as_bytes())?;
        log::info!("🌐 已生成: {}", SNIPPET_FILE);
        report.push(SNIPPET_FILE, AssetKind::Html, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_project_root(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("logo-generator-handler-{tag}-{nanos}"));
        std::fs::create_dir_all(dir.join("public")).expect("create temp dir");
        dir
    }

    fn write_logo(config: &GeneratorConfig, size: u32) {
        let img = ImageBuffer::from_fn(size, size, |x, y| {
            Rgba([(x % 255) as u8, (y % 255) as u8, 200, if x < size / 2 { 255 } else { 128 }])
        });
        DynamicImage::ImageRgba8(img)
            .save_with_format(&config.source_path, ImageFormat::Png)
            .expect("write logo");
    }

    #[test]
    fn report_counts_every_written_file() {
        let root = unique_project_root("report");
        let config = GeneratorConfig::for_project_root(&root);
        write_logo(&config, 96);

        let report = IconGenerator::new(config.clone()).generate().expect("generate");

        let images = SIZE_CATALOG.len() + IOS_ICONSET.len() + ANDROID_BUCKETS.len() * 2;
        assert_eq!(report.count_of(AssetKind::Png), images);
        assert_eq!(report.count_of(AssetKind::Favicon), 1);
        assert_eq!(report.count_of(AssetKind::Json), 2);
        assert_eq!(report.count_of(AssetKind::Xml), 2);
        assert_eq!(report.count_of(AssetKind::Html), 1);

        for asset in &report.assets {
            assert!(
                config.output_dir.join(&asset.relative_path).exists(),
                "missing {}",
                asset.relative_path.display()
            );
        }

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn android_foreground_matches_launcher() {
        let root = unique_project_root("foreground");
        let config = GeneratorConfig::for_project_root(&root);
        write_logo(&config, 64);

        IconGenerator::new(config.clone()).generate().expect("generate");

        let bucket = config.output_dir.join("android").join("mipmap-xhdpi");
        let launcher = std::fs::read(bucket.join(ANDROID_LAUNCHER)).expect("launcher");
        let foreground =
            std::fs::read(bucket.join(ANDROID_LAUNCHER_FOREGROUND)).expect("foreground");
        assert_eq!(launcher, foreground);

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn missing_source_creates_no_output() {
        let root = unique_project_root("missing");
        let config = GeneratorConfig::for_project_root(&root);

        let err = IconGenerator::new(config.clone()).generate().err().expect("should fail");
        assert!(matches!(err, IconError::SourceNotFound(_)));
        assert!(!config.output_dir.exists());
        assert!(!config.manifest_path().exists());

        let _ = std::fs::remove_dir_all(root);
    }
}
