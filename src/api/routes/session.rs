//! Session Routes
//!
//! JSON mirror of the page interactions.
//!
//! - GET /api/v1/session       - Current session state
//! - POST /api/v1/bubble/click - Register a bubble click
//! - POST /api/v1/chat         - Submit a chat message

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, ChatResponse, ClickResponse, SessionResponse};
use crate::api::error::ApiResult;
use crate::api::session;
use crate::api::state::AppState;
use crate::session::bubble::reward_message;

use super::check_message_len;

/// GET /api/v1/session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<(HeaderMap, Json<SessionResponse>)> {
    let handle = session::resolve(&state, &headers).await?;
    let cookies = session::cookie_headers(&state, &handle)?;

    Ok((
        cookies,
        Json(SessionResponse {
            session_id: handle.id,
            created_at: handle.created_at,
            state: handle.state,
        }),
    ))
}

/// POST /api/v1/bubble/click
pub async fn click(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<(HeaderMap, Json<ClickResponse>)> {
    let handle = session::resolve(&state, &headers).await?;
    let (next, outcome) = state.sessions.register_click(&handle.id).await?;

    let reward = outcome.reward();
    Ok((
        session::cookie_headers(&state, &handle)?,
        Json(ClickResponse {
            clicks: next.bubble.clicks(),
            threshold: next.bubble.threshold(),
            reward,
            message: reward.map(reward_message),
        }),
    ))
}

/// POST /api/v1/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> ApiResult<(HeaderMap, Json<ChatResponse>)> {
    check_message_len(&req.message, state.config.max_message_len)?;

    let handle = session::resolve(&state, &headers).await?;
    let transcript = state
        .sessions
        .submit_chat(&handle.id, &req.message, state.config.reply_delay)
        .await?;

    Ok((
        session::cookie_headers(&state, &handle)?,
        Json(ChatResponse {
            chat_id: transcript.id().to_string(),
            messages: transcript.messages().to_vec(),
        }),
    ))
}
