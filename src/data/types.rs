//! Core data types for the dashboard snapshot
//!
//! This module defines the entities shown on the dashboard:
//! - `UserProgress` and `Skill`: level, points and earned badges
//! - `Revenue` and `RevenueMonth`: headline figures and the monthly history
//! - `ShopPerformance`: one bar per shop
//! - `AgentChat` and `ChatMessage`: the seeded agent conversation
//! - `RankingEntry`: the employee leaderboard
//! - `BubbleChallenge`: the initial click-challenge parameters

use serde::{Deserialize, Serialize};

/// Complete dashboard snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub user_progress: UserProgress,
    pub revenue: Revenue,
    pub revenue_history: Vec<RevenueMonth>,
    pub shop_performance: Vec<ShopPerformance>,
    pub agent_chat: AgentChat,
    pub ranking: Vec<RankingEntry>,
    pub bubble_challenge: BubbleChallenge,
}

impl DashboardData {
    /// The leaderboard entry of the viewing user, if any
    pub fn current_user(&self) -> Option<&RankingEntry> {
        self.ranking.iter().find(|e| e.is_current_user)
    }
}

/// Level and points of the viewing user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProgress {
    pub level: u32,
    pub level_title: String,
    pub current_points: u32,
    pub total_points: u32,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl UserProgress {
    /// Fraction of the level completed, in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        if self.total_points == 0 {
            return 0.0;
        }
        (self.current_points as f64 / self.total_points as f64).clamp(0.0, 1.0)
    }
}

/// An earned skill badge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

/// Headline revenue figures in whole euros
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Revenue {
    pub total: u64,
    pub personal: u64,
    pub dsl: u64,
    pub warranty: u64,
}

/// One month of the revenue history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueMonth {
    /// Short month label, e.g. "Jan"
    pub month: String,
    pub total: u64,
    pub personal: u64,
}

/// Performance of a single shop on a 0-100 scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopPerformance {
    pub name: String,
    pub performance: u8,
    /// Bar color as `#rrggbb`
    pub color: String,
}

/// Seeded agent conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentChat {
    pub id: String,
    pub messages: Vec<ChatMessage>,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Agent,
    User,
}

impl ChatRole {
    /// CSS class used for the message bubble
    pub fn css_class(&self) -> &'static str {
        match self {
            ChatRole::Agent => "agent-message",
            ChatRole::User => "user-message",
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::Agent => write!(f, "agent"),
            ChatRole::User => write!(f, "user"),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Display timestamp, e.g. "Heute, 09:30" or "Jetzt"
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a message from the viewing user
    pub fn user(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create a message from the agent
    pub fn agent(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Agent,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

/// Click-challenge parameters from the snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BubbleChallenge {
    pub current_clicks: u32,
    pub required_clicks: u32,
    pub reward: u32,
}
