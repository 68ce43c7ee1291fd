//! Relay HTTP Server
//!
//! Provides the two endpoints the frontend talks to:
//! - `POST /api/chat` - relay a prompt to the HF router
//! - `GET /health` - liveness and configured model
//!
//! Every response carries permissive CORS headers; the relay exists so the
//! browser can call an API it could not reach directly.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::router_client::RouterClient;

// ============================================================================
// SERVER STATE
// ============================================================================

pub struct RelayState {
    pub config: RelayConfig,
    pub router: RouterClient,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            router: RouterClient::new(&config),
            config,
        }
    }
}

// ============================================================================
// REQUEST/RESPONSE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: Option<String>,
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

/// One element of the legacy text-generation response array
#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /api/chat - relay one prompt to the router
///
/// The reply is always a one-element array in the legacy shape:
/// `[{"generated_text": "..."}]`.
async fn relay_chat(
    State(state): State<Arc<RelayState>>,
    Json(req): Json<PromptRequest>,
) -> Result<Json<Vec<GeneratedText>>, RelayError> {
    // Trim only for validation; the prompt is forwarded untrimmed
    let prompt = match &req.prompt {
        Some(p) if !p.trim().is_empty() => p.clone(),
        _ => {
            warn!("Rejected chat request without a prompt");
            return Err(RelayError::MissingPrompt);
        }
    };

    // Request key wins; an empty string falls through to the configured default
    let api_key = match req
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .or(state.config.api_key.as_deref())
    {
        Some(key) => key.to_string(),
        None => {
            warn!("Rejected chat request: no API key available");
            return Err(RelayError::MissingApiKey);
        }
    };

    debug!("Relaying prompt: {} chars", prompt.chars().count());

    let content = state.router.chat(&prompt, &api_key).await?;

    Ok(Json(vec![GeneratedText {
        generated_text: content,
    }]))
}

/// GET /health - never touches the router
async fn health_check(State(state): State<Arc<RelayState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.model.clone(),
    })
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

pub fn router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/api/chat", post(relay_chat))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// SERVER STARTUP
// ============================================================================

pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let model = config.model.clone();
    let has_default_key = config.api_key.is_some();

    let state = Arc::new(RelayState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HF relay running on http://{}", addr);
    info!("Model: {}", model);
    if !has_default_key {
        warn!("HF_API_KEY not set - requests must carry their own apiKey");
    }

    axum::serve(listener, router(state)).await?;

    Ok(())
}
