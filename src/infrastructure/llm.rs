//! LLM 客户端
//!
//! 使用 async-openai 提供与 OpenAI 兼容接口的交互能力

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use tracing::debug;

use crate::domain::CompletionSource;
use crate::errors::{Result, RouterError};

/// OpenAI 客户端
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAIClient {
    /// 创建新的 OpenAI 客户端
    pub fn new_with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);

        // 只尝试一次：关闭 async-openai 默认的 5xx/429 指数退避重试
        let single_attempt = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let client = Client::with_config(config).with_backoff(single_attempt);

        Self {
            client,
            model,
            timeout: None,
        }
    }

    /// 设置单次调用超时，None 表示一直等待
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 单条 user 消息补全，不带 system prompt 和历史
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map(ChatCompletionRequestMessage::User)
            .map_err(|e| RouterError::Upstream(format!("构建消息失败: {}", e)))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .build()
            .map_err(|e| RouterError::Upstream(format!("构建请求失败: {}", e)))?;

        let chat = self.client.chat();
        let call = chat.create(request);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| RouterError::Upstream("LLM API call timed out.".to_string()))?,
            None => call.await,
        }
        .map_err(|e| RouterError::Upstream(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(model = %self.model, chars = content.len(), "LLM completion received");
        Ok(content)
    }
}

#[async_trait]
impl CompletionSource for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.chat(prompt).await
    }
}
