//! Glücks-Bubble Challenge counter
//!
//! A click counter that starts at 1. Every click increments it; when the
//! counter reaches the threshold the reward is paid out and the counter
//! snaps back to 1 in the same step.

use serde::Serialize;

use crate::data::BubbleChallenge;

/// Default number of clicks needed for the reward
pub const DEFAULT_THRESHOLD: u32 = 5;

/// Default reward in points
pub const DEFAULT_REWARD: u32 = 50;

/// Counter state of one viewer's challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BubbleChallengeState {
    clicks: u32,
    threshold: u32,
    reward: u32,
}

/// Result of a single click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Counter advanced without reaching the threshold
    Counted { clicks: u32 },
    /// Threshold reached, reward paid and counter reset
    Rewarded { points: u32 },
}

impl ClickOutcome {
    /// Points won by this click, if any
    pub fn reward(&self) -> Option<u32> {
        match self {
            ClickOutcome::Counted { .. } => None,
            ClickOutcome::Rewarded { points } => Some(*points),
        }
    }
}

impl BubbleChallengeState {
    /// Fresh counter with the given threshold and reward
    ///
    /// Thresholds below 2 are raised to 2 so the counter can advance at all.
    pub fn new(threshold: u32, reward: u32) -> Self {
        Self {
            clicks: 1,
            threshold: threshold.max(2),
            reward,
        }
    }

    /// Counter seeded from the snapshot's challenge parameters
    pub fn from_challenge(challenge: &BubbleChallenge) -> Self {
        let mut state = Self::new(challenge.required_clicks, challenge.reward);
        if (1..state.threshold).contains(&challenge.current_clicks) {
            state.clicks = challenge.current_clicks;
        }
        state
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }

    /// Register one click, returning the next state and what happened
    pub fn register_click(self) -> (Self, ClickOutcome) {
        let clicks = self.clicks + 1;

        if clicks >= self.threshold {
            let next = Self { clicks: 1, ..self };
            (next, ClickOutcome::Rewarded { points: self.reward })
        } else {
            let next = Self { clicks, ..self };
            (next, ClickOutcome::Counted { clicks })
        }
    }

    /// Prompt line shown under the challenge title
    pub fn prompt(&self) -> String {
        format!(
            "Klicke {}x und sichere dir Punkte! ({}/{})",
            self.threshold, self.clicks, self.threshold
        )
    }
}

impl Default for BubbleChallengeState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_REWARD)
    }
}

/// Success message for a paid reward
pub fn reward_message(points: u32) -> String {
    format!("Glückwunsch! Du hast {} Punkte gewonnen!", points)
}
