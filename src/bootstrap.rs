//! # 启动模块
//!
//! 根据 `AppConfig` 装配真实数据源并启动 HTTP 服务

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::QueryRouter;
use crate::core::config::AppConfig;
use crate::infrastructure::web::start_web_server;
use crate::infrastructure::{OpenAIClient, OpenWeatherClient, UnimplementedNews, WikipediaClient};

/// Launcher - builds the router once and serves it
pub struct Launcher {
    config: AppConfig,
}

impl Launcher {
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Construct every connector from configuration
    pub fn build_router(&self) -> Result<QueryRouter> {
        let cfg = &self.config;
        cfg.validate()?;
        let timeout = cfg.upstream_timeout();

        let weather = OpenWeatherClient::new(
            &cfg.openweather_base_url,
            cfg.openweather_api_key.clone(),
            cfg.weather_units.clone(),
            timeout,
        )
        .context("Failed to build weather client")?;

        let encyclopedia = WikipediaClient::new(&cfg.wikipedia_base_url, timeout)
            .context("Failed to build Wikipedia client")?;

        let completion = OpenAIClient::new_with_base_url(
            cfg.openai_api_key.clone(),
            cfg.openai_model.clone(),
            cfg.openai_base_url.clone(),
        )
        .with_timeout(timeout);

        info!(
            model = %cfg.openai_model,
            units = %cfg.weather_units,
            timeout_secs = cfg.upstream_timeout_secs,
            "Connectors configured"
        );

        Ok(QueryRouter::with_sources(
            Arc::new(weather),
            Arc::new(encyclopedia),
            Arc::new(completion),
            Arc::new(UnimplementedNews),
        ))
    }

    /// Build the router and serve until the listener fails
    pub async fn launch(&self) -> Result<()> {
        let router = self.build_router()?;
        start_web_server(&self.config.bind_addr, router).await
    }
}
