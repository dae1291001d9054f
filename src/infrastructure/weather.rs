//! OpenWeather 客户端
//!
//! 查询当前天气，任何上游失败都会让整个请求失败

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::WeatherSource;
use crate::errors::{Result, RouterError};

use super::http::build_client;

/// Detail returned to the caller when the service answers with an error status
pub const WEATHER_FAILED: &str = "Weather API call failed.";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: Vec<WeatherEntry>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Kept as a JSON number so 20 renders as "20" and 20.5 as "20.5"
    temp: serde_json::Number,
}

/// OpenWeather current-weather client
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        units: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut endpoint = Url::parse(base_url.trim_end_matches('/'))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| {
                RouterError::Config(format!(
                    "OpenWeather base URL cannot carry a path: {}",
                    base_url
                ))
            })?
            .pop_if_empty()
            .extend(["data", "2.5", "weather"]);

        Ok(Self {
            http: build_client(timeout)?,
            endpoint,
            api_key: api_key.into(),
            units: units.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_conditions(&self, city: &str) -> Result<String> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, city, "Weather API returned an error status");
            return Err(RouterError::Upstream(WEATHER_FAILED.to_string()));
        }

        let body: WeatherResponse = response.json().await?;
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| {
                RouterError::MalformedResponse("weather list is empty".to_string())
            })?;

        debug!(city, temp = %body.main.temp, "Weather fetched");
        Ok(format_conditions(&body.main.temp, &description, city))
    }
}

/// "It's {temp}°C and {description} in {City} today."
pub fn format_conditions(temp: &serde_json::Number, description: &str, city: &str) -> String {
    format!(
        "It's {}°C and {} in {} today.",
        temp,
        description,
        title_case(city)
    )
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
