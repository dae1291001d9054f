//! 配置管理
//!
//! 启动时从命令行参数、进程环境变量和可选的 `.env` 文件加载一次，
//! 之后作为不可变值传给各连接器

use std::time::Duration;

use clap::Parser;
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Routes questions to weather, encyclopedia or LLM sources"
)]
pub struct AppConfig {
    /// HTTP listen address
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: String,

    // LLM
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    // Weather
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    pub openweather_api_key: String,

    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = "http://api.openweathermap.org")]
    pub openweather_base_url: String,

    /// Unit system passed to the weather service (metric, imperial, standard)
    #[arg(long, env = "WEATHER_UNITS", default_value = "metric")]
    pub weather_units: String,

    // Encyclopedia
    #[arg(long, env = "WIKIPEDIA_BASE_URL", default_value = "https://en.wikipedia.org")]
    pub wikipedia_base_url: String,

    /// Per-call upstream timeout in seconds, 0 waits forever
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Checks that the configuration is usable.
    ///
    /// Credentials are not checked: a missing key only shows up as a failed
    /// upstream call.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("OPENAI_BASE_URL", &self.openai_base_url),
            ("OPENWEATHER_BASE_URL", &self.openweather_base_url),
            ("WIKIPEDIA_BASE_URL", &self.wikipedia_base_url),
        ] {
            if let Err(e) = Url::parse(value) {
                anyhow::bail!("{} is not a valid URL ({}): {}", name, value, e);
            }
        }

        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("BIND_ADDR must not be empty");
        }

        Ok(())
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        match self.upstream_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::parse_from(["test"]);

        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.weather_units, "metric");
        assert_eq!(config.upstream_timeout_secs, 30);
        assert_eq!(config.upstream_timeout(), Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_custom_values() {
        let config = AppConfig::parse_from([
            "test",
            "--bind-addr",
            "127.0.0.1:9000",
            "--openai-api-key",
            "sk-custom",
            "--openai-model",
            "gpt-4o-mini",
            "--openweather-api-key",
            "ow-key",
            "--wikipedia-base-url",
            "http://localhost:8081",
            "--upstream-timeout-secs",
            "0",
        ]);

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.openai_api_key, "sk-custom");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openweather_api_key, "ow-key");
        assert_eq!(config.wikipedia_base_url, "http://localhost:8081");
        assert_eq!(config.upstream_timeout(), None);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = AppConfig::parse_from(["test", "--openweather-base-url", "not a url"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_BASE_URL"));
    }

    #[test]
    fn test_missing_credentials_are_not_validated() {
        let mut config = AppConfig::parse_from(["test"]);
        config.openai_api_key.clear();
        config.openweather_api_key.clear();
        assert!(config.validate().is_ok());
    }
}
