//! 配置管理
//!
//! 配置来源（优先级从低到高）：`config.toml` → `config.{APP_ENV}.toml` →
//! `TRACKED_*` 环境变量 → 常用的独立环境变量（`DATABASE_URL` 等）。

mod r#impl;
mod structs;

pub use structs::*;
