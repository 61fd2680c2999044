//! Route handlers. Each one is a thin shell over [`ChatService`].

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use switchboard_agents::{NewSession, ToolCall};
use switchboard_common::{ChatError, SessionId};

use crate::error::ApiError;
use crate::protocol::{
    AgentsResponse, ChatRequest, ChatResponse, HealthResponse, HistoryResponse, ToolsResponse,
};
use crate::AppState;

pub async fn new_session(State(state): State<AppState>) -> Json<NewSession> {
    Json(state.service.new_session().await)
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let outcome = state
        .service
        .chat(&req.session_id, &req.message, req.agent.as_deref())
        .await?;
    Ok(Json(outcome.into()))
}

pub async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let session_id = SessionId::from(session_id);
    let history = state.service.history(&session_id).await?;
    Ok(Json(HistoryResponse {
        session_id,
        history,
    }))
}

pub async fn agents(State(state): State<AppState>) -> Json<AgentsResponse> {
    Json(AgentsResponse {
        agents: state.service.agents().to_vec(),
    })
}

pub async fn tools(State(state): State<AppState>) -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: state.service.tools(),
    })
}

/// Run a tool by name. An empty body means "no arguments".
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolCall>, ApiError> {
    let args = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| ChatError::InvalidArguments(e.to_string()))?
    };
    let call = state.service.call_tool(&name, &args).await?;
    Ok(Json(call))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sessions: state.service.sessions().len().await,
    })
}
