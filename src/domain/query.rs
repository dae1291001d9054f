//! 问答领域实体
//!
//! 单次请求内流转的值

use serde::{Deserialize, Serialize};

/// Inbound question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Classified category of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Current weather for a city
    Weather,
    /// Factual lookup answered from an encyclopedia summary
    #[serde(rename = "wikipedia")]
    Encyclopedic,
    /// Recent news (not implemented upstream)
    News,
    /// Anything else, answered by the language model
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Weather => "weather",
            Intent::Encyclopedic => "wikipedia",
            Intent::News => "news",
            Intent::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply: which source was used, and what it said
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub reasoning: String,
    pub answer: String,
}

impl AskResponse {
    /// Assemble a reply. Both parts are passed through untouched.
    pub fn new(reasoning: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            answer: answer.into(),
        }
    }
}
