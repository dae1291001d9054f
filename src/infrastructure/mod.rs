//! 基础设施层：外部系统交互
//!
//! 提供与外部系统（天气、百科、LLM、日志、HTTP 服务）的交互能力

pub mod http;
pub mod llm;
pub mod logger;
pub mod news;
pub mod weather;
pub mod web;
pub mod wikipedia;

pub use llm::OpenAIClient;
pub use news::UnimplementedNews;
pub use weather::OpenWeatherClient;
pub use wikipedia::WikipediaClient;
