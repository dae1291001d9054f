//! 意图路由问答服务
//!
//! 将一条自然语言问题分类为固定意图之一，并转发给对应的数据源：
//! - 天气（OpenWeather）
//! - 百科摘要（Wikipedia）
//! - 通用问答（OpenAI 兼容 LLM）
//! - 新闻（占位，未实现）
//!
//! # 架构分层
//!
//! - `domain`: 请求值与数据源能力接口
//! - `core`: 配置、意图分类、分发
//! - `infrastructure`: 外部服务客户端、日志、HTTP 服务
//! - `application`: 单次问答编排

// 领域层
pub mod domain;

// 核心层
pub mod core;

// 基础设施层
pub mod infrastructure;

// 应用层
pub mod application;

pub mod bootstrap;
pub mod errors;

pub use application::QueryRouter;
pub use bootstrap::Launcher;
pub use crate::core::config::AppConfig;
pub use crate::core::dispatch::{extract_city, Dispatcher};
pub use crate::core::intent::classify;
pub use domain::{AskRequest, AskResponse, Intent};
pub use errors::{Result, RouterError};

/// 服务版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
