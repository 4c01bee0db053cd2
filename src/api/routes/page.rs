//! Page Routes
//!
//! Server-rendered dashboard and its form interactions.
//!
//! - GET /                  - Render the dashboard (`?tab=` selects a tab)
//! - POST /bubble/click     - Register a bubble click
//! - POST /chat             - Submit a chat message
//! - GET /static/style.css  - Stylesheet

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use std::sync::Arc;

use crate::api::dto::{ChatForm, PageQuery};
use crate::api::error::ApiResult;
use crate::api::session;
use crate::api::state::AppState;
use crate::render::{render_page, styles::STYLESHEET, Tab};
use crate::session::Notice;

use super::check_message_len;

/// GET /
///
/// Render the page for the viewer's session. A pending notice is shown
/// once and then cleared.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> ApiResult<(HeaderMap, Html<String>)> {
    let handle = session::resolve(&state, &headers).await?;
    let tab = Tab::from_slug(query.tab.as_deref());
    let notice = state.sessions.take_notice(&handle.id).await?;

    let data = state.data.snapshot();
    let body = render_page(&data, &handle.state, notice.as_ref(), tab);

    Ok((session::cookie_headers(&state, &handle)?, Html(body)))
}

/// POST /bubble/click
///
/// Register one click and send the browser back to the challenge.
pub async fn bubble_click(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<(HeaderMap, Redirect)> {
    let handle = session::resolve(&state, &headers).await?;
    state.sessions.register_click(&handle.id).await?;

    Ok((
        session::cookie_headers(&state, &handle)?,
        Redirect::to("/#bubble"),
    ))
}

/// POST /chat
///
/// Append the message and the canned agent reply, then re-render.
/// Empty messages are ignored. A message over the length limit is dropped
/// and the page shows an error notice instead.
pub async fn chat_submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ChatForm>,
) -> ApiResult<(HeaderMap, Redirect)> {
    let handle = session::resolve(&state, &headers).await?;
    let max = state.config.max_message_len;

    match check_message_len(&form.message, max) {
        Ok(()) => {
            state
                .sessions
                .submit_chat(&handle.id, &form.message, state.config.reply_delay)
                .await?;
        }
        Err(e) => {
            tracing::info!(session_id = %handle.id, error = %e, "Chat message rejected");
            let notice = Notice::error(format!(
                "Die Nachricht ist zu lang (höchstens {} Zeichen).",
                max
            ));
            state.sessions.set_notice(&handle.id, notice).await?;
        }
    }

    Ok((
        session::cookie_headers(&state, &handle)?,
        Redirect::to("/#chat"),
    ))
}

/// GET /static/style.css
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
