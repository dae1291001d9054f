//! 新闻数据源占位实现

use async_trait::async_trait;

use crate::domain::NewsSource;
use crate::errors::Result;

pub const NEWS_UNAVAILABLE: &str = "News fetching not implemented in this version.";

/// Answers every news question with a fixed notice; makes no external call
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedNews;

#[async_trait]
impl NewsSource for UnimplementedNews {
    async fn headlines(&self, _query: &str) -> Result<String> {
        Ok(NEWS_UNAVAILABLE.to_string())
    }
}
