//! Dashboard sample data
//!
//! Fixed snapshot of every entity the dashboard shows. Nothing here changes
//! at runtime; session-scoped state lives in [`crate::session`].

pub mod error;
pub mod sample;
pub mod types;

pub use error::{DataError, DataResult};
pub use sample::SampleDataProvider;
pub use types::{
    AgentChat, BubbleChallenge, ChatMessage, ChatRole, DashboardData, RankingEntry, Revenue,
    RevenueMonth, ShopPerformance, Skill, UserProgress,
};
