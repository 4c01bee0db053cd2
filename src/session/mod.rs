//! Session Interaction State
//!
//! The only mutable state in the dashboard: the bubble-challenge counter,
//! the chat transcript and a one-shot notice, held per viewer and never
//! persisted.
//!
//! ## Modules
//!
//! - [`bubble`]: Click counter with threshold reward
//! - [`chat`]: Append-only transcript with canned agent replies
//! - [`state`]: The per-viewer state value
//! - [`store`]: In-memory store keyed by session id

pub mod bubble;
pub mod chat;
pub mod error;
pub mod state;
pub mod store;

pub use bubble::{BubbleChallengeState, ClickOutcome};
pub use chat::{agent_reply, ChatTranscript};
pub use error::{SessionError, SessionResult};
pub use state::{Notice, NoticeKind, SessionState};
pub use store::{SessionHandle, SessionId, SessionStore};
