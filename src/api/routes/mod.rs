//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod health;
pub mod page;
pub mod session;

use crate::api::error::{ApiError, ApiResult};

/// Reject chat messages longer than `max` characters
pub(crate) fn check_message_len(message: &str, max: usize) -> ApiResult<()> {
    let len = message.chars().count();
    if len > max {
        return Err(ApiError::Validation(format!(
            "message is {} characters, maximum is {}",
            len, max
        )));
    }
    Ok(())
}
