//! # 平台元数据模块
//!
//! ## 设计思路
//!
//! 每个描述文件都是纯函数：输入只有静态目录与品牌常量，输出为完整文档字符串。
//! 写盘由编排层负责，因此这里的函数可以直接在测试中断言内容。
//!
//! ## 实现思路
//!
//! - JSON 文档（`Contents.json` / `manifest.json`）使用 `serde` 结构体 + `serde_json` 美化输出。
//! - Android XML 为固定模板，仅颜色值来自品牌常量。
//! - HTML 片段中的每个 `/icons/` 链接都从尺寸目录反查，`sizes` 取文件真实像素，
//!   引用目录外文件会直接报错。

use serde::Serialize;

use super::catalog::{self, IOS_SLOTS, IconSpec};
use super::{BrandProfile, IconError};

#[derive(Serialize)]
struct IosContents {
    images: Vec<IosImage>,
    info: IosInfo,
}

#[derive(Serialize)]
struct IosImage {
    filename: &'static str,
    idiom: &'static str,
    scale: &'static str,
    size: &'static str,
}

#[derive(Serialize)]
struct IosInfo {
    author: &'static str,
    version: u32,
}

/// Web App Manifest。字段顺序即输出顺序。
#[derive(Serialize)]
struct WebManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    description: &'a str,
    icons: Vec<ManifestIcon>,
    start_url: &'a str,
    display: &'a str,
    theme_color: &'a str,
    background_color: &'a str,
}

#[derive(Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime_type: &'static str,
    purpose: &'static str,
}

/// `ios-iconset/Contents.json`。
pub fn ios_contents_json() -> Result<String, IconError> {
    let contents = IosContents {
        images: IOS_SLOTS
            .iter()
            .map(|slot| IosImage {
                filename: slot.filename,
                idiom: slot.idiom,
                scale: slot.scale,
                size: slot.size,
            })
            .collect(),
        info: IosInfo {
            author: "xcode",
            version: 1,
        },
    };

    to_pretty_json(&contents)
}

/// `android/mipmap-anydpi-v26/ic_launcher.xml`。
pub fn android_adaptive_icon_xml() -> String {
    concat!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
        "<adaptive-icon xmlns:android=\"http://schemas.android.com/apk/res/android\">\n",
        "    <background android:drawable=\"@color/ic_launcher_background\"/>\n",
        "    <foreground android:drawable=\"@mipmap/ic_launcher_foreground\"/>\n",
        "</adaptive-icon>\n",
    )
    .to_string()
}

/// `android/values/colors.xml`，定义自适应图标背景色。
pub fn android_colors_xml(brand: &BrandProfile) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <resources>\n    \
         <color name=\"ic_launcher_background\">{}</color>\n\
         </resources>\n",
        brand.theme_color
    )
}

/// `manifest.json`，图标列表取自 Web / PWA 子集。
pub fn web_manifest_json(brand: &BrandProfile) -> Result<String, IconError> {
    let manifest = WebManifest {
        name: brand.name,
        short_name: brand.short_name,
        description: brand.description,
        icons: catalog::web_icons()
            .map(|entry| ManifestIcon {
                src: icon_url(brand, entry),
                sizes: size_label(entry.size),
                mime_type: "image/png",
                purpose: "any",
            })
            .collect(),
        start_url: brand.start_url,
        display: brand.display,
        theme_color: brand.theme_color,
        background_color: brand.background_color,
    };

    to_pretty_json(&manifest)
}

/// HTML 片段中的一个图标链接。
struct SnippetLink {
    rel: &'static str,
    typed_png: bool,
    file_name: &'static str,
}

const fn link(rel: &'static str, typed_png: bool, file_name: &'static str) -> SnippetLink {
    SnippetLink {
        rel,
        typed_png,
        file_name,
    }
}

const SNIPPET_LINKS: &[SnippetLink] = &[
    link("icon", true, "favicon-16x16.png"),
    link("icon", true, "favicon-32x32.png"),
    link("icon", true, "favicon-48x48.png"),
    link("apple-touch-icon", false, "ios-icon-60x60.png"),
    link("apple-touch-icon", false, "ios-icon-60x60@2x.png"),
    link("apple-touch-icon", false, "ios-icon-76x76.png"),
    link("apple-touch-icon", false, "ios-icon-76x76@2x.png"),
    link("apple-touch-icon", false, "ios-icon-83.5x83.5@2x.png"),
    link("apple-touch-icon", false, "ios-icon-60x60@3x.png"),
    link("apple-touch-icon", false, "icon-192x192.png"),
    link("icon", true, "icon-512x512.png"),
];

/// `favicon-snippet.html`，可直接粘贴进 `<head>`。
pub fn favicon_snippet_html(brand: &BrandProfile) -> Result<String, IconError> {
    let mut html = String::from("<!-- Favicon and app icons -->\n");

    for entry in SNIPPET_LINKS {
        let spec = catalog::find(entry.file_name).ok_or_else(|| {
            IconError::Serialize(format!("HTML 片段引用了未生成的文件：{}", entry.file_name))
        })?;
        let type_attr = if entry.typed_png { " type=\"image/png\"" } else { "" };
        html.push_str(&format!(
            "<link rel=\"{}\"{} sizes=\"{}\" href=\"{}\">\n",
            entry.rel,
            type_attr,
            size_label(spec.size),
            icon_url(brand, spec)
        ));
    }

    html.push_str(&format!("<link rel=\"manifest\" href=\"{}\">\n", brand.manifest_url));
    html.push_str(&format!("<meta name=\"theme-color\" content=\"{}\">\n", brand.theme_color));
    html.push_str("<meta name=\"apple-mobile-web-app-capable\" content=\"yes\">\n");
    html.push_str("<meta name=\"apple-mobile-web-app-status-bar-style\" content=\"default\">\n");
    html.push_str(&format!(
        "<meta name=\"apple-mobile-web-app-title\" content=\"{}\">\n",
        brand.name
    ));

    Ok(html)
}

fn icon_url(brand: &BrandProfile, entry: &IconSpec) -> String {
    format!("{}/{}", brand.icon_url_prefix.trim_end_matches('/'), entry.file_name)
}

fn size_label(size: u32) -> String {
    format!("{size}x{size}")
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, IconError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| IconError::Serialize(format!("JSON 序列化失败：{}", e)))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ios_contents_lists_all_slots() {
        let json: serde_json::Value =
            serde_json::from_str(&ios_contents_json().expect("contents")).expect("valid json");

        let images = json["images"].as_array().expect("images array");
        assert_eq!(images.len(), 5);
        assert_eq!(images[3]["filename"], "83.5@2x.png");
        assert_eq!(images[3]["size"], "83.5x83.5");
        assert_eq!(images[4]["idiom"], "ios-marketing");
        assert_eq!(json["info"]["author"], "xcode");
        assert_eq!(json["info"]["version"], 1);
    }

    #[test]
    fn manifest_lists_web_icons_with_matching_sizes() {
        let brand = BrandProfile::default();
        let text = web_manifest_json(&brand).expect("manifest");
        assert!(text.contains("\"name\": \"MediSync\""));

        let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        let icons = json["icons"].as_array().expect("icons array");
        assert_eq!(icons.len(), catalog::web_icons().count());

        for (icon, entry) in icons.iter().zip(catalog::web_icons()) {
            assert_eq!(icon["src"], format!("/icons/{}", entry.file_name));
            assert_eq!(icon["sizes"], format!("{0}x{0}", entry.size));
            assert_eq!(icon["type"], "image/png");
            assert_eq!(icon["purpose"], "any");
        }
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["theme_color"], "#0056D2");
    }

    #[test]
    fn manifest_keeps_field_order() {
        let text = web_manifest_json(&BrandProfile::default()).expect("manifest");
        let name = text.find("\"name\"").expect("name");
        let icons = text.find("\"icons\"").expect("icons");
        let background = text.find("\"background_color\"").expect("background");
        assert!(name < icons && icons < background);
    }

    #[test]
    fn colors_xml_uses_theme_color() {
        let xml = android_colors_xml(&BrandProfile::default());
        assert!(xml.contains("<color name=\"ic_launcher_background\">#0056D2</color>"));
    }

    #[test]
    fn adaptive_icon_references_background_and_foreground() {
        let xml = android_adaptive_icon_xml();
        assert!(xml.contains("@color/ic_launcher_background"));
        assert!(xml.contains("@mipmap/ic_launcher_foreground"));
    }

    #[test]
    fn snippet_links_only_catalog_files_with_real_sizes() {
        let html = favicon_snippet_html(&BrandProfile::default()).expect("snippet");

        for line in html.lines().filter(|line| line.contains("href=\"/icons/")) {
            let href = line.split("href=\"/icons/").nth(1).and_then(|rest| rest.split('"').next());
            let spec = href.and_then(catalog::find).expect("href points at a catalog file");
            assert!(line.contains(&format!("sizes=\"{0}x{0}\"", spec.size)), "{line}");
        }

        assert!(html.contains("href=\"/icons/ios-icon-76x76@2x.png\""));
        assert!(!html.contains("ios-icon-152x152.png"));
        assert!(html.contains("<link rel=\"manifest\" href=\"/manifest.json\">"));
        assert!(html.contains("<meta name=\"apple-mobile-web-app-title\" content=\"MediSync\">"));
    }

    #[test]
    fn emitters_are_idempotent() {
        let brand = BrandProfile::default();
        assert_eq!(
            web_manifest_json(&brand).expect("first"),
            web_manifest_json(&brand).expect("second")
        );
        assert_eq!(
            favicon_snippet_html(&brand).expect("first"),
            favicon_snippet_html(&brand).expect("second")
        );
    }
}
