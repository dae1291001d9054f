//! Wikipedia 摘要客户端
//!
//! 查不到的条目返回占位回答而不是错误，只有传输失败或无法解析的响应才让请求失败

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::EncyclopediaSource;
use crate::errors::{Result, RouterError};

use super::http::build_client;

pub const NOT_FOUND_ANSWER: &str = "Sorry, I couldn't find information on that topic.";
pub const NO_EXTRACT_ANSWER: &str = "No information found.";

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

/// Spaces become underscores, the way article titles are keyed
pub fn slugify(query: &str) -> String {
    query.replace(' ', "_")
}

/// Wikipedia REST summary client
#[derive(Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base: Url,
}

impl WikipediaClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))?;
        if base.cannot_be_a_base() {
            return Err(RouterError::Config(format!(
                "Wikipedia base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            http: build_client(timeout)?,
            base,
        })
    }

    /// `{base}/api/rest_v1/page/summary/{slug}`, slug encoded as one segment
    pub fn summary_url(&self, query: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "rest_v1", "page", "summary"])
                .push(&slugify(query));
        }
        url
    }
}

#[async_trait]
impl EncyclopediaSource for WikipediaClient {
    async fn summary(&self, query: &str) -> Result<String> {
        let url = self.summary_url(query);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, "Wikipedia lookup missed");
            return Ok(NOT_FOUND_ANSWER.to_string());
        }

        let body: SummaryResponse = response.json().await?;
        debug!(query, has_extract = body.extract.is_some(), "Wikipedia summary fetched");
        Ok(body.extract.unwrap_or_else(|| NO_EXTRACT_ANSWER.to_string()))
    }
}
