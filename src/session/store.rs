//! In-memory session store
//!
//! Holds one [`SessionState`] per viewer, keyed by a random id carried in a
//! cookie. Nothing is persisted: restarting the process or idling past the
//! timeout starts the viewer over from the snapshot.
//!
//! Thread-safe via Tokio's async RwLock. Every mutation is one
//! read-modify-write under the write lock. Chat submits of one session
//! are additionally serialized by a per-session mutex, so each user
//! message is directly followed by its reply.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tokio::time::interval;
use uuid::Uuid;

use super::bubble::ClickOutcome;
use super::chat::ChatTranscript;
use super::error::{SessionError, SessionResult};
use super::state::{Notice, SessionState};
use crate::config::SessionConfig;

/// Unique identifier for a viewer session
pub type SessionId = String;

/// A stored session with bookkeeping
#[derive(Debug, Clone)]
struct SessionEntry {
    state: SessionState,
    created_at: DateTime<Utc>,
    last_seen: Instant,
    /// Held for the whole of one chat submit
    chat_lock: Arc<Mutex<()>>,
}

/// Session resolved for a request
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: SessionId,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    /// True when the session was created by this lookup
    pub is_new: bool,
}

/// Stores all viewer sessions
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    /// State every new session starts from
    seed: SessionState,
    config: SessionConfig,
}

impl SessionStore {
    /// Create an empty store whose sessions start from `seed`
    pub fn new(seed: SessionState, config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            seed,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Resolve the session for `id`, creating a new one if it is missing or unknown
    ///
    /// Unknown ids are never adopted: the new session always gets a fresh id.
    pub async fn get_or_create(&self, id: Option<&str>) -> SessionResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = Instant::now();
                return Ok(SessionHandle {
                    id: id.to_string(),
                    state: entry.state.clone(),
                    created_at: entry.created_at,
                    is_new: false,
                });
            }
        }

        if sessions.len() >= self.config.max_sessions {
            tracing::warn!(
                max_sessions = self.config.max_sessions,
                "Session limit reached"
            );
            return Err(SessionError::CapacityReached {
                max: self.config.max_sessions,
            });
        }

        let id = Uuid::new_v4().to_string();
        let entry = SessionEntry {
            state: self.seed.clone(),
            created_at: Utc::now(),
            last_seen: Instant::now(),
            chat_lock: Arc::new(Mutex::new(())),
        };
        let handle = SessionHandle {
            id: id.clone(),
            state: entry.state.clone(),
            created_at: entry.created_at,
            is_new: true,
        };
        sessions.insert(id.clone(), entry);

        tracing::debug!(session_id = %id, active = sessions.len(), "Session created");
        Ok(handle)
    }

    /// Current state of a session
    pub async fn get(&self, id: &str) -> SessionResult<SessionState> {
        self.sessions
            .read()
            .await
            .get(id)
            .map(|entry| entry.state.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Replace a session's state with the result of `f`
    pub async fn update<T, F>(&self, id: &str, f: F) -> SessionResult<T>
    where
        F: FnOnce(SessionState) -> (SessionState, T),
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let (next, out) = f(entry.state.clone());
        entry.state = next;
        entry.last_seen = Instant::now();
        Ok(out)
    }

    /// Register a bubble click for a session
    pub async fn register_click(&self, id: &str) -> SessionResult<(SessionState, ClickOutcome)> {
        let result = self
            .update(id, |state| {
                let (next, outcome) = state.register_click();
                (next.clone(), (next, outcome))
            })
            .await?;

        tracing::debug!(
            session_id = %id,
            clicks = result.0.bubble.clicks(),
            reward = ?result.1.reward(),
            "Bubble click registered"
        );
        Ok(result)
    }

    /// Submit a chat message, pausing `delay` before the agent reply
    ///
    /// Empty text leaves the transcript untouched. The store lock is not
    /// held during the pause, so the user message is visible immediately.
    /// A second submit for the same session waits until this one's reply
    /// is appended.
    pub async fn submit_chat(
        &self,
        id: &str,
        text: &str,
        delay: Duration,
    ) -> SessionResult<ChatTranscript> {
        if text.is_empty() {
            return self.get(id).await.map(|state| state.chat);
        }

        let chat_lock = self
            .sessions
            .read()
            .await
            .get(id)
            .map(|entry| Arc::clone(&entry.chat_lock))
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        let _pending = chat_lock.lock().await;

        self.update(id, |state| {
            let chat = state.chat.clone().push_user(text);
            (state.with_chat(chat), ())
        })
        .await?;

        tracing::debug!(session_id = %id, len = text.chars().count(), "Chat message received");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.update(id, |state| {
            let chat = state.chat.clone().push_agent_reply(text);
            (state.with_chat(chat.clone()), chat)
        })
        .await
    }

    /// Leave a notice for the session's next render
    pub async fn set_notice(&self, id: &str, notice: Notice) -> SessionResult<()> {
        self.update(id, |state| (state.with_notice(notice), ())).await
    }

    /// Remove and return a session's pending notice
    pub async fn take_notice(&self, id: &str) -> SessionResult<Option<Notice>> {
        self.update(id, SessionState::take_notice).await
    }

    /// Number of active sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop sessions idle past the timeout, returning how many were removed
    pub async fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now()).await
    }

    /// Drop sessions that are idle past the timeout as seen from `now`
    pub async fn sweep_expired_at(&self, now: Instant) -> usize {
        let timeout = self.config.idle_timeout();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= timeout);

        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, active = sessions.len(), "Expired sessions swept");
        }
        removed
    }

    /// Start a background task that sweeps expired sessions periodically
    pub fn start_background_sweep(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(self);
        let sweep_interval = store.config.sweep_interval();

        tokio::spawn(async move {
            let mut ticker = interval(sweep_interval);

            loop {
                ticker.tick().await;
                store.sweep_expired().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ChatRole, SampleDataProvider};

    fn test_store(config: SessionConfig) -> SessionStore {
        let seed = SessionState::new(SampleDataProvider::load().unwrap().data());
        SessionStore::new(seed, config)
    }

    #[tokio::test]
    async fn test_create_and_resume() {
        let store = test_store(SessionConfig::default());

        let first = store.get_or_create(None).await.unwrap();
        assert!(first.is_new);
        assert_eq!(first.state.bubble.clicks(), 1);

        let again = store.get_or_create(Some(&first.id)).await.unwrap();
        assert!(!again.is_new);
        assert_eq!(again.id, first.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_gets_fresh_session() {
        let store = test_store(SessionConfig::default());

        let handle = store.get_or_create(Some("forged-id")).await.unwrap();
        assert!(handle.is_new);
        assert_ne!(handle.id, "forged-id");
        assert!(store.get("forged-id").await.is_err());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = test_store(SessionConfig::default());
        let a = store.get_or_create(None).await.unwrap();
        let b = store.get_or_create(None).await.unwrap();

        store.register_click(&a.id).await.unwrap();
        store.register_click(&a.id).await.unwrap();
        store
            .submit_chat(&a.id, "nur für a", Duration::ZERO)
            .await
            .unwrap();

        let state_a = store.get(&a.id).await.unwrap();
        let state_b = store.get(&b.id).await.unwrap();
        assert_eq!(state_a.bubble.clicks(), 3);
        assert_eq!(state_b.bubble.clicks(), 1);
        assert_eq!(state_a.chat.len(), 5);
        assert_eq!(state_b.chat.len(), 3);
    }

    #[tokio::test]
    async fn test_click_reward_sets_notice_once() {
        let store = test_store(SessionConfig::default());
        let handle = store.get_or_create(None).await.unwrap();

        for _ in 0..3 {
            let (_, outcome) = store.register_click(&handle.id).await.unwrap();
            assert!(outcome.reward().is_none());
        }
        let (state, outcome) = store.register_click(&handle.id).await.unwrap();
        assert_eq!(outcome, ClickOutcome::Rewarded { points: 50 });
        assert_eq!(state.bubble.clicks(), 1);

        let notice = store.take_notice(&handle.id).await.unwrap();
        assert!(notice.unwrap().message.contains("50 Punkte"));
        assert!(store.take_notice(&handle.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_chat() {
        let store = test_store(SessionConfig::default());
        let handle = store.get_or_create(None).await.unwrap();

        let unchanged = store
            .submit_chat(&handle.id, "", Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(unchanged.len(), 3);

        let chat = store
            .submit_chat(&handle.id, "hello", Duration::from_millis(1))
            .await
            .unwrap();
        assert_eq!(chat.len(), 5);
        assert_eq!(chat.messages()[3].role, ChatRole::User);
        assert_eq!(chat.messages()[3].content, "hello");
        assert_eq!(chat.messages()[4].role, ChatRole::Agent);
        assert!(chat.messages()[4].content.contains("'hello'"));
    }

    #[tokio::test]
    async fn test_overlapping_submits_keep_reply_order() {
        let store = Arc::new(test_store(SessionConfig::default()));
        let handle = store.get_or_create(None).await.unwrap();
        let delay = Duration::from_millis(50);

        let first = {
            let store = Arc::clone(&store);
            let id = handle.id.clone();
            tokio::spawn(async move { store.submit_chat(&id, "A", delay).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = {
            let store = Arc::clone(&store);
            let id = handle.id.clone();
            tokio::spawn(async move { store.submit_chat(&id, "B", delay).await })
        };
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        let chat = store.get(&handle.id).await.unwrap().chat;
        let tail: Vec<(ChatRole, String)> = chat.messages()[3..]
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect();
        assert_eq!(tail.len(), 4);
        assert_eq!(tail[0], (ChatRole::User, "A".to_string()));
        assert_eq!(tail[1].0, ChatRole::Agent);
        assert!(tail[1].1.contains("'A'"));
        assert_eq!(tail[2], (ChatRole::User, "B".to_string()));
        assert_eq!(tail[3].0, ChatRole::Agent);
        assert!(tail[3].1.contains("'B'"));
    }

    #[tokio::test]
    async fn test_clicks_proceed_during_chat_reply() {
        let store = Arc::new(test_store(SessionConfig::default()));
        let handle = store.get_or_create(None).await.unwrap();

        let pending = {
            let store = Arc::clone(&store);
            let id = handle.id.clone();
            tokio::spawn(async move {
                store
                    .submit_chat(&id, "warte", Duration::from_millis(100))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        let (state, _) = store.register_click(&handle.id).await.unwrap();
        assert_eq!(state.bubble.clicks(), 2);
        assert_eq!(state.chat.len(), 4);

        assert_eq!(pending.await.unwrap().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_capacity_limit() {
        let store = test_store(SessionConfig {
            max_sessions: 2,
            ..SessionConfig::default()
        });

        let a = store.get_or_create(None).await.unwrap();
        store.get_or_create(None).await.unwrap();
        let err = store.get_or_create(None).await.unwrap_err();
        assert_eq!(err, SessionError::CapacityReached { max: 2 });

        // Existing sessions still resolve at capacity
        assert!(store.get_or_create(Some(&a.id)).await.is_ok());
    }

    #[tokio::test]
    async fn test_sweep_expired() {
        let store = test_store(SessionConfig {
            idle_timeout_secs: 60,
            ..SessionConfig::default()
        });
        let handle = store.get_or_create(None).await.unwrap();

        assert_eq!(store.sweep_expired().await, 0);
        assert_eq!(store.len().await, 1);

        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(store.sweep_expired_at(later).await, 1);
        assert!(store.is_empty().await);
        assert_eq!(
            store.get(&handle.id).await.unwrap_err(),
            SessionError::NotFound(handle.id.clone())
        );
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let store = test_store(SessionConfig::default());
        let result = store.register_click("missing").await;
        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }
}
