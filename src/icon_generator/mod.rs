//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载校验 → 按目录缩放导出 → 平台打包 → 元数据输出”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `catalog`：尺寸目录与平台目录（纯静态数据）
//! - `handler`：编排整条生成流程
//! - `loader`：源图存在性检查、解码与 RGBA 归一化
//! - `pipeline`：缩放、PNG 编码与写盘
//! - `favicon`：多分辨率 ICO 打包
//! - `metadata`：iOS / Android / Web 描述文件与 HTML 片段
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（日志初始化 + 退出码）
//!    ↓
//! lib.rs::run（顶层错误边界）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性检查 + 解码 + RGBA）
//!    ├─ pipeline.rs（缩放 + 编码 + 写盘）×目录条目
//!    ├─ favicon.rs（16/32/48 打包为 ICO）
//!    └─ metadata.rs（Contents.json / XML / manifest / HTML）
//!    ↓
//! GenerationReport 或 IconError
//! ```
//!
//! ## 分层职责建议
//!
//! - 新增或调整输出尺寸优先改 `catalog.rs`
//! - 品牌信息与路径变更优先改 `config.rs`
//! - 阶段顺序变更优先改 `handler.rs`

pub mod catalog;
mod config;
mod error;
mod favicon;
mod handler;
mod loader;
pub mod metadata;
mod pipeline;
mod source;

pub use config::{
    BrandProfile, GeneratorConfig, MANIFEST_FILE_NAME, OUTPUT_DIR, ResampleFilter, SOURCE_LOGO,
};
pub use error::IconError;
pub use favicon::build_favicon;
pub use handler::IconGenerator;
pub use loader::load_source;
pub use pipeline::{encode_png, resize_square};
pub use source::{AssetKind, GeneratedAsset, GenerationReport, SourceImage};
