//! Per-session interaction state
//!
//! `SessionState` is a plain value. Interactions consume it and return the
//! next state, the store swaps the new value in.

use serde::Serialize;

use super::bubble::{reward_message, BubbleChallengeState, ClickOutcome};
use super::chat::ChatTranscript;
use crate::data::DashboardData;

/// Kind of a one-shot banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Banner shown once on the next render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Everything one viewer can change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub bubble: BubbleChallengeState,
    pub chat: ChatTranscript,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl SessionState {
    /// Initial state for a new viewer
    pub fn new(data: &DashboardData) -> Self {
        Self {
            bubble: BubbleChallengeState::from_challenge(&data.bubble_challenge),
            chat: ChatTranscript::from_chat(&data.agent_chat),
            notice: None,
        }
    }

    /// Register a bubble click; a paid reward leaves a success notice
    pub fn register_click(self) -> (Self, ClickOutcome) {
        let (bubble, outcome) = self.bubble.register_click();
        let notice = match outcome.reward() {
            Some(points) => Some(Notice::success(reward_message(points))),
            None => self.notice,
        };

        (
            Self {
                bubble,
                notice,
                ..self
            },
            outcome,
        )
    }

    /// Replace the chat transcript
    pub fn with_chat(self, chat: ChatTranscript) -> Self {
        Self { chat, ..self }
    }

    /// Replace the pending notice
    pub fn with_notice(self, notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..self
        }
    }

    /// Remove the pending notice, returning it
    pub fn take_notice(mut self) -> (Self, Option<Notice>) {
        let notice = self.notice.take();
        (self, notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleDataProvider;

    fn fresh() -> SessionState {
        SessionState::new(SampleDataProvider::load().unwrap().data())
    }

    #[test]
    fn test_new_state_is_seeded_from_snapshot() {
        let state = fresh();
        assert_eq!(state.bubble.clicks(), 1);
        assert_eq!(state.chat.id(), "sales-chat-1");
        assert_eq!(state.chat.len(), 3);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_reward_leaves_notice() {
        let mut state = fresh();
        for _ in 0..3 {
            state = state.register_click().0;
            assert!(state.notice.is_none());
        }

        let (state, outcome) = state.register_click();
        assert_eq!(outcome.reward(), Some(50));
        assert_eq!(
            state.notice,
            Some(Notice::success("Glückwunsch! Du hast 50 Punkte gewonnen!"))
        );

        let (state, notice) = state.take_notice();
        assert!(notice.is_some());
        assert!(state.notice.is_none());
        assert_eq!(state.bubble.clicks(), 1);
    }

    #[test]
    fn test_with_chat_keeps_bubble() {
        let state = fresh().register_click().0;
        let chat = state.chat.clone().submit("hallo");
        let state = state.with_chat(chat);
        assert_eq!(state.bubble.clicks(), 2);
        assert_eq!(state.chat.len(), 5);
    }
}
