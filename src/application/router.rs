//! 问答路由
//!
//! 单次问答入口：分类、分发、组装

use std::sync::Arc;

use tracing::{error, info};

use crate::core::dispatch::Dispatcher;
use crate::core::intent::classify;
use crate::domain::{
    AskResponse, CompletionSource, EncyclopediaSource, NewsSource, WeatherSource,
};
use crate::errors::Result;

/// Stateless question router
///
/// Cheap to clone; every clone shares the same connectors.
#[derive(Clone)]
pub struct QueryRouter {
    dispatcher: Dispatcher,
}

impl QueryRouter {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build a router from individual sources
    pub fn with_sources(
        weather: Arc<dyn WeatherSource>,
        encyclopedia: Arc<dyn EncyclopediaSource>,
        completion: Arc<dyn CompletionSource>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self::new(Dispatcher::new(weather, encyclopedia, completion, news))
    }

    /// Answer a single question
    pub async fn ask(&self, query: &str) -> Result<AskResponse> {
        let request_id = uuid::Uuid::new_v4();
        let intent = classify(query);
        info!(%request_id, %intent, "Routing query");

        match self.dispatcher.dispatch(query, intent).await {
            Ok((reasoning, answer)) => {
                info!(%request_id, %intent, "Query answered");
                Ok(AskResponse::new(reasoning, answer))
            }
            Err(e) => {
                error!(%request_id, %intent, "Query failed: {}", e);
                Err(e)
            }
        }
    }
}
