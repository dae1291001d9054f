//! 核心层：配置、意图分类与分发
//!
//! 包含配置加载、关键词意图分类器和意图分发器

pub mod config;
pub mod dispatch;
pub mod intent;
