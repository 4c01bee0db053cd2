//! KI-Agent chat transcript
//!
//! Append-only list of messages for one viewer, seeded from the snapshot.
//! The agent never reasons about the input: every reply is the same
//! sentence with the user's text quoted inside it.

use serde::Serialize;

use crate::data::{AgentChat, ChatMessage};

/// Timestamp placeholder for messages written during the session
pub const NOW_TIMESTAMP: &str = "Jetzt";

/// Canned agent reply quoting the user's text
pub fn agent_reply(text: &str) -> String {
    format!(
        "Ich habe Ihre Anfrage '{}' erhalten und werde sie bearbeiten.",
        text
    )
}

/// Chronological chat transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTranscript {
    id: String,
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Empty transcript with the given chat id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
        }
    }

    /// Transcript seeded with the snapshot conversation
    pub fn from_chat(chat: &AgentChat) -> Self {
        Self {
            id: chat.id.clone(),
            messages: chat.messages.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message. Empty text leaves the transcript unchanged.
    pub fn push_user(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.messages.push(ChatMessage::user(text, NOW_TIMESTAMP));
        }
        self
    }

    /// Append the canned agent reply to `text`. Empty text is ignored.
    pub fn push_agent_reply(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.messages
                .push(ChatMessage::agent(agent_reply(text), NOW_TIMESTAMP));
        }
        self
    }

    /// Append the user message and the agent reply in one step
    pub fn submit(self, text: &str) -> Self {
        self.push_user(text).push_agent_reply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ChatRole;

    fn seeded() -> ChatTranscript {
        ChatTranscript::from_chat(&AgentChat {
            id: "sales-chat-1".to_string(),
            messages: vec![ChatMessage::agent("Hallo Max!", "Heute, 09:30")],
        })
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let before = seeded();
        let after = before.clone().submit("");
        assert_eq!(before, after);
    }

    #[test]
    fn test_submit_appends_user_and_agent() {
        let transcript = seeded().submit("hello");

        assert_eq!(transcript.len(), 3);
        let user = &transcript.messages()[1];
        assert_eq!(user.role, ChatRole::User);
        assert_eq!(user.content, "hello");
        assert_eq!(user.timestamp, "Jetzt");

        let agent = &transcript.messages()[2];
        assert_eq!(agent.role, ChatRole::Agent);
        assert_eq!(
            agent.content,
            "Ich habe Ihre Anfrage 'hello' erhalten und werde sie bearbeiten."
        );
    }

    #[test]
    fn test_order_is_chronological_without_dedup() {
        let transcript = ChatTranscript::new("t").submit("a").submit("b").submit("a");

        let contents: Vec<_> = transcript
            .messages()
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["a", "b", "a"]);
        assert_eq!(transcript.len(), 6);
    }

    #[test]
    fn test_whitespace_is_accepted_verbatim() {
        let transcript = ChatTranscript::new("t").submit("  ");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].content, "  ");
    }
}
