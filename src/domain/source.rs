//! 数据源能力接口
//!
//! 每个外部连接器只通过这些 trait 暴露，分发器不关心背后是真实服务还是测试替身

use async_trait::async_trait;

use crate::errors::Result;

/// Current weather conditions for a city
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Returns a finished sentence describing the conditions
    async fn current_conditions(&self, city: &str) -> Result<String>;
}

/// Encyclopedia summaries
///
/// A lookup that finds nothing is still `Ok`: implementations answer with a
/// placeholder sentence instead of failing.
#[async_trait]
pub trait EncyclopediaSource: Send + Sync {
    async fn summary(&self, query: &str) -> Result<String>;
}

/// Free-form language-model completion
#[async_trait]
pub trait CompletionSource: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Recent news
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn headlines(&self, query: &str) -> Result<String>;
}
