//! 意图分类
//!
//! 按固定顺序匹配关键词规则，首个命中的规则生效

use crate::domain::Intent;

/// Keywords that mark a factual question
pub const ENCYCLOPEDIC_KEYWORDS: &[&str] = &["who", "what", "when", "where", "wikipedia"];

/// A single classification rule over the lower-cased query
pub struct IntentRule {
    pub intent: Intent,
    pub matches: fn(&str) -> bool,
}

/// Priority order matters: a query mentioning both "weather" and "who" is a
/// weather question.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Weather,
        matches: mentions_weather,
    },
    IntentRule {
        intent: Intent::Encyclopedic,
        matches: mentions_encyclopedic,
    },
    IntentRule {
        intent: Intent::News,
        matches: mentions_news,
    },
];

fn mentions_weather(q: &str) -> bool {
    q.contains("weather")
}

fn mentions_encyclopedic(q: &str) -> bool {
    ENCYCLOPEDIC_KEYWORDS.iter().any(|k| q.contains(k))
}

fn mentions_news(q: &str) -> bool {
    q.contains("news")
}

/// Classify a raw query. Matching is case-insensitive substring search.
pub fn classify(query: &str) -> Intent {
    let lowered = query.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::General)
}
