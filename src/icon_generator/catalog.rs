//! # 尺寸目录模块
//!
//! 所有输出文件与目标尺寸的静态映射。顺序即生成顺序，保证日志与报告稳定。

/// 目录条目所属的用途分组。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGroup {
    Favicon,
    /// Web / PWA 图标，进入 Web 清单。
    Web,
    Ios,
    Android,
    AppStore,
    Misc,
}

/// 一个正方形输出图片：文件名 + 边长（像素）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub size: u32,
    pub group: IconGroup,
}

const fn spec(file_name: &'static str, size: u32, group: IconGroup) -> IconSpec {
    IconSpec {
        file_name,
        size,
        group,
    }
}

/// 平铺在输出根目录下的尺寸目录。
pub const SIZE_CATALOG: &[IconSpec] = &[
    spec("favicon-16x16.png", 16, IconGroup::Favicon),
    spec("favicon-32x32.png", 32, IconGroup::Favicon),
    spec("favicon-48x48.png", 48, IconGroup::Favicon),
    spec("icon-72x72.png", 72, IconGroup::Web),
    spec("icon-96x96.png", 96, IconGroup::Web),
    spec("icon-128x128.png", 128, IconGroup::Web),
    spec("icon-144x144.png", 144, IconGroup::Web),
    spec("icon-152x152.png", 152, IconGroup::Web),
    spec("icon-192x192.png", 192, IconGroup::Web),
    spec("icon-384x384.png", 384, IconGroup::Web),
    spec("icon-512x512.png", 512, IconGroup::Web),
    spec("ios-icon-60x60.png", 60, IconGroup::Ios),
    spec("ios-icon-60x60@2x.png", 120, IconGroup::Ios),
    spec("ios-icon-60x60@3x.png", 180, IconGroup::Ios),
    spec("ios-icon-76x76.png", 76, IconGroup::Ios),
    spec("ios-icon-76x76@2x.png", 152, IconGroup::Ios),
    spec("ios-icon-83.5x83.5@2x.png", 167, IconGroup::Ios),
    spec("android-icon-36x36.png", 36, IconGroup::Android),
    spec("android-icon-48x48.png", 48, IconGroup::Android),
    spec("android-icon-72x72.png", 72, IconGroup::Android),
    spec("android-icon-96x96.png", 96, IconGroup::Android),
    spec("android-icon-144x144.png", 144, IconGroup::Android),
    spec("android-icon-192x192.png", 192, IconGroup::Android),
    spec("android-icon-512x512.png", 512, IconGroup::Android),
    spec("app-store-icon-1024x1024.png", 1024, IconGroup::AppStore),
    spec("logo-64x64.png", 64, IconGroup::Misc),
    spec("logo-128x128.png", 128, IconGroup::Misc),
    spec("logo-256x256.png", 256, IconGroup::Misc),
    spec("logo-512x512.png", 512, IconGroup::Misc),
];

/// iOS 图标集子目录名。
pub const IOS_ICONSET_DIR: &str = "ios-iconset";

/// `ios-iconset/` 下的文件。
pub const IOS_ICONSET: &[(&str, u32)] = &[
    ("60.png", 60),
    ("60@2x.png", 120),
    ("76.png", 76),
    ("83.5@2x.png", 167),
    ("1024.png", 1024),
];

/// `Contents.json` 中的一个图标槽位。
#[derive(Debug, Clone, Copy)]
pub struct IosSlot {
    pub filename: &'static str,
    pub idiom: &'static str,
    pub scale: &'static str,
    pub size: &'static str,
}

pub const IOS_SLOTS: &[IosSlot] = &[
    IosSlot {
        filename: "60.png",
        idiom: "iphone",
        scale: "2x",
        size: "60x60",
    },
    IosSlot {
        filename: "60@2x.png",
        idiom: "iphone",
        scale: "3x",
        size: "60x60",
    },
    IosSlot {
        filename: "76.png",
        idiom: "ipad",
        scale: "2x",
        size: "76x76",
    },
    IosSlot {
        filename: "83.5@2x.png",
        idiom: "ipad",
        scale: "2x",
        size: "83.5x83.5",
    },
    IosSlot {
        filename: "1024.png",
        idiom: "ios-marketing",
        scale: "1x",
        size: "1024x1024",
    },
];

/// Android 资源根目录名。
pub const ANDROID_DIR: &str = "android";
pub const ANDROID_LAUNCHER: &str = "ic_launcher.png";
pub const ANDROID_LAUNCHER_FOREGROUND: &str = "ic_launcher_foreground.png";
pub const ANDROID_ADAPTIVE_DIR: &str = "mipmap-anydpi-v26";
pub const ANDROID_ADAPTIVE_FILE: &str = "ic_launcher.xml";
pub const ANDROID_VALUES_DIR: &str = "values";
pub const ANDROID_COLORS_FILE: &str = "colors.xml";

/// 密度桶 → 边长。
pub const ANDROID_BUCKETS: &[(&str, u32)] = &[
    ("mipmap-mdpi", 36),
    ("mipmap-hdpi", 48),
    ("mipmap-xhdpi", 72),
    ("mipmap-xxhdpi", 96),
    ("mipmap-xxxhdpi", 144),
    ("mipmap-xxxhdpi-512", 512),
];

pub const FAVICON_FILE: &str = "favicon.ico";
/// ICO 容器内的帧尺寸，最小尺寸在前。
pub const FAVICON_SIZES: &[u32] = &[16, 32, 48];

pub const SNIPPET_FILE: &str = "favicon-snippet.html";

/// Web / PWA 子集，Web 清单按此顺序列出图标。
pub fn web_icons() -> impl Iterator<Item = &'static IconSpec> {
    SIZE_CATALOG
        .iter()
        .filter(|entry| entry.group == IconGroup::Web)
}

/// 按文件名查找目录条目。
pub fn find(file_name: &str) -> Option<&'static IconSpec> {
    SIZE_CATALOG
        .iter()
        .find(|entry| entry.file_name == file_name)
}
