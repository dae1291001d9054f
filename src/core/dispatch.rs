//! 意图分发
//!
//! 把分类后的意图映射到唯一一次数据源调用，以及该分支固定的推理说明

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::domain::{CompletionSource, EncyclopediaSource, Intent, NewsSource, WeatherSource};
use crate::errors::Result;

pub const WEATHER_REASONING: &str =
    "The user asked about weather, so I fetched data from OpenWeather API.";
pub const ENCYCLOPEDIC_REASONING: &str =
    "The user asked a factual question, so I searched Wikipedia.";
pub const NEWS_REASONING: &str = "The user asked for recent updates, so I used the News API.";
pub const GENERAL_REASONING: &str = "The user asked a general question, so I used GPT reasoning.";

/// The standalone word "in"
static IN_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bin\b").unwrap());

/// A trailing "today" and surrounding whitespace
static TRAILING_TODAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\s*\btoday)?\s*$").unwrap());

/// Pull a city name out of a weather question.
///
/// Takes whatever follows the last "in" and drops a trailing "today". Nothing
/// checks that a city was actually found, so the result may be empty.
pub fn extract_city(query: &str) -> String {
    let tail = match IN_WORD_RE.find_iter(query).last() {
        Some(m) => &query[m.end()..],
        None => query,
    };

    TRAILING_TODAY_RE.replace(tail.trim(), "").trim().to_string()
}

/// Routes one query to its data source
#[derive(Clone)]
pub struct Dispatcher {
    weather: Arc<dyn WeatherSource>,
    encyclopedia: Arc<dyn EncyclopediaSource>,
    completion: Arc<dyn CompletionSource>,
    news: Arc<dyn NewsSource>,
}

impl Dispatcher {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        encyclopedia: Arc<dyn EncyclopediaSource>,
        completion: Arc<dyn CompletionSource>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            weather,
            encyclopedia,
            completion,
            news,
        }
    }

    /// Invoke the source for `intent` and return `(reasoning, answer)`.
    pub async fn dispatch(&self, query: &str, intent: Intent) -> Result<(&'static str, String)> {
        match intent {
            Intent::Weather => {
                let city = extract_city(query);
                debug!(city = %city, "Extracted city for weather lookup");
                let answer = self.weather.current_conditions(&city).await?;
                Ok((WEATHER_REASONING, answer))
            }
            Intent::Encyclopedic => {
                let answer = self.encyclopedia.summary(query).await?;
                Ok((ENCYCLOPEDIC_REASONING, answer))
            }
            Intent::News => {
                let answer = self.news.headlines(query).await?;
                Ok((NEWS_REASONING, answer))
            }
            Intent::General => {
                let answer = self.completion.complete(query).await?;
                Ok((GENERAL_REASONING, answer))
            }
        }
    }
}
