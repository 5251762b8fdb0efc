//! # MediSync Logo 生成工具 — 命令入口
//!
//! 本文件仅负责日志初始化与退出码转换，生成逻辑见 `lib.rs`。
//! 在 Web 项目根目录执行：读取 `public/logo.png`，输出到 `public/icons/`。

use std::process::ExitCode;

use logo_generator::icon_generator::GeneratorConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    ExitCode::from(logo_generator::run(&GeneratorConfig::default()))
}
