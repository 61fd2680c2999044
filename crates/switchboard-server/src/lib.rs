//! HTTP surface for the Switchboard chat demo.
//!
//! Routes:
//! - `POST /new-session`
//! - `POST /chat`
//! - `GET /history/{session_id}`
//! - `GET /agents`
//! - `GET /tools`
//! - `POST /tools/{name}/call`
//! - `GET /health`

mod error;
mod handlers;
pub mod protocol;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use switchboard_agents::ChatService;
use switchboard_common::SwitchboardError;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: ChatService,
}

impl AppState {
    pub fn new(service: ChatService) -> Self {
        Self { service }
    }
}

/// CORS for a single browser origin, with credentials.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, SwitchboardError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| SwitchboardError::Server(format!("invalid allowed origin: {e}")))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn build_app(state: AppState, allowed_origin: &str) -> Result<Router, SwitchboardError> {
    let app = Router::new()
        .route("/new-session", post(handlers::new_session))
        .route("/chat", post(handlers::chat))
        .route("/history/{session_id}", get(handlers::history))
        .route("/agents", get(handlers::agents))
        .route("/tools", get(handlers::tools))
        .route("/tools/{name}/call", post(handlers::call_tool))
        .route("/health", get(handlers::health))
        .layer(cors_layer(allowed_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(app)
}
