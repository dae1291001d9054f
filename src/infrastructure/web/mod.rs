//! Web 服务器模块
//!
//! 提供问答 HTTP API

use std::sync::Arc;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::QueryRouter;
use crate::domain::{AskRequest, AskResponse};
use crate::errors::RouterError;

pub const SERVICE_NAME: &str = "AI Agent Backend";
pub const SERVICE_DESCRIPTION: &str =
    "Routes each question to a weather service, Wikipedia, or a language model";

// ==================== 状态 ====================

#[derive(Clone)]
pub struct AppState {
    pub router: QueryRouter,
}

// ==================== 处理器 ====================

/// 服务信息
async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": SERVICE_NAME,
        "description": SERVICE_DESCRIPTION,
        "version": crate::VERSION,
    }))
}

/// 健康检查
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 问答入口
async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, RouterError> {
    let response = state.router.ask(&request.query).await?;
    Ok(Json(response))
}

// ==================== 路由 ====================

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/ask", post(ask))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ==================== 服务器启动 ====================

pub async fn start_web_server(bind_addr: &str, router: QueryRouter) -> anyhow::Result<()> {
    let state = Arc::new(AppState { router });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Web server started on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
