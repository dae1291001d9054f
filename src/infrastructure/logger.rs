//! 日志模块
//!
//! 提供基础日志功能

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// RUST_LOG 优先；未设置时默认 info，verbose 时为 debug
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_target(verbose))
        .init();
}
