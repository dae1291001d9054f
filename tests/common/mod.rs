//! 测试通用工具
//!
//! 提供测试替身、模拟上游服务和日志初始化
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use axum::Router;

use query_router::domain::{CompletionSource, EncyclopediaSource, WeatherSource};
use query_router::infrastructure::UnimplementedNews;
use query_router::{QueryRouter, Result, RouterError};

static INIT: Once = Once::new();

/// 初始化测试环境
pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// 在随机端口启动模拟上游服务，返回监听地址
pub async fn spawn_mock(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Weather double: records the requested city and answers or fails
pub struct StubWeather {
    pub answer: Option<String>,
    pub cities: Mutex<Vec<String>>,
}

impl StubWeather {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
            cities: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            cities: Mutex::new(Vec::new()),
        })
    }

    pub fn requested_cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherSource for StubWeather {
    async fn current_conditions(&self, city: &str) -> Result<String> {
        self.cities.lock().unwrap().push(city.to_string());
        self.answer
            .clone()
            .ok_or_else(|| RouterError::Upstream("Weather API call failed.".to_string()))
    }
}

/// Encyclopedia double
pub struct StubEncyclopedia(pub String);

#[async_trait]
impl EncyclopediaSource for StubEncyclopedia {
    async fn summary(&self, _query: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Completion double: echoes a fixed answer, or fails when `None`
pub struct StubCompletion(pub Option<String>);

#[async_trait]
impl CompletionSource for StubCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| RouterError::Upstream("LLM unavailable".to_string()))
    }
}

/// Router wired entirely to doubles
pub fn stub_router(weather: Arc<StubWeather>, completion: Option<&str>) -> QueryRouter {
    QueryRouter::with_sources(
        weather,
        Arc::new(StubEncyclopedia("Ada Lovelace was a mathematician.".to_string())),
        Arc::new(StubCompletion(completion.map(str::to_string))),
        Arc::new(UnimplementedNews),
    )
}
