//! Data Transfer Objects
//!
//! Request and response types for the endpoints.
//! Form types are urlencoded, everything under `/api/v1` is JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::ChatMessage;
use crate::session::SessionState;

// ============================================
// PAGE DTOs
// ============================================

/// Query string of the page route
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Selected tab slug
    #[serde(default)]
    pub tab: Option<String>,
}

/// Chat form submitted from the page
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

// ============================================
// SESSION DTOs
// ============================================

/// Session state response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: SessionState,
}

/// Bubble click response
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    /// Counter after the click
    pub clicks: u32,
    pub threshold: u32,
    /// Points won by this click
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<u32>,
    /// Success message when a reward was paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================
// CHAT DTOs
// ============================================

/// Chat submit request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat transcript response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub chat_id: String,
    pub messages: Vec<ChatMessage>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Number of active viewer sessions
    pub sessions: usize,
    /// Configured session limit
    pub max_sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
