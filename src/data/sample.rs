//! Sample Data Provider
//!
//! The dashboard snapshot is a JSON literal compiled into the binary.
//! It is parsed and validated once when the provider is built; a snapshot
//! that fails validation is a fatal startup error. Afterwards every call to
//! [`SampleDataProvider::snapshot`] hands out an identical copy.

use super::error::{DataError, DataResult};
use super::types::DashboardData;

/// Embedded sample snapshot
const SAMPLE_JSON: &str = include_str!("sample.json");

/// Provides the fixed dashboard snapshot
#[derive(Debug, Clone)]
pub struct SampleDataProvider {
    data: DashboardData,
}

impl SampleDataProvider {
    /// Load and validate the embedded snapshot
    pub fn load() -> DataResult<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    /// Parse and validate a snapshot from JSON
    pub fn from_json(json: &str) -> DataResult<Self> {
        let data: DashboardData = serde_json::from_str(json)?;
        validate(&data)?;

        tracing::debug!(
            shops = data.shop_performance.len(),
            months = data.revenue_history.len(),
            ranking = data.ranking.len(),
            "Sample data loaded"
        );

        Ok(Self { data })
    }

    /// A fresh copy of the snapshot
    pub fn snapshot(&self) -> DashboardData {
        self.data.clone()
    }

    /// Borrow the snapshot without copying
    pub fn data(&self) -> &DashboardData {
        &self.data
    }
}

/// Check every snapshot invariant
pub fn validate(data: &DashboardData) -> DataResult<()> {
    let progress = &data.user_progress;
    if progress.total_points == 0 {
        return Err(DataError::Invalid("total_points must be positive".to_string()));
    }
    if progress.current_points > progress.total_points {
        return Err(DataError::Invalid(format!(
            "current_points {} exceeds total_points {}",
            progress.current_points, progress.total_points
        )));
    }

    if data.revenue_history.is_empty() {
        return Err(DataError::Missing("revenue_history"));
    }

    if data.shop_performance.is_empty() {
        return Err(DataError::Missing("shop_performance"));
    }
    for shop in &data.shop_performance {
        if shop.performance > 100 {
            return Err(DataError::Invalid(format!(
                "performance of {} is {}, expected 0-100",
                shop.name, shop.performance
            )));
        }
        if !is_hex_color(&shop.color) {
            return Err(DataError::Invalid(format!(
                "color of {} is not #rrggbb: {}",
                shop.name, shop.color
            )));
        }
    }

    if data.ranking.is_empty() {
        return Err(DataError::Missing("ranking"));
    }
    for (idx, entry) in data.ranking.iter().enumerate() {
        if entry.rank as usize != idx + 1 {
            return Err(DataError::Invalid(format!(
                "ranking entry {} has rank {}, expected {}",
                entry.name,
                entry.rank,
                idx + 1
            )));
        }
    }
    let current_users = data.ranking.iter().filter(|e| e.is_current_user).count();
    if current_users != 1 {
        return Err(DataError::Invalid(format!(
            "expected exactly one current user in ranking, found {}",
            current_users
        )));
    }

    let challenge = &data.bubble_challenge;
    if challenge.required_clicks < 2 {
        return Err(DataError::Invalid(
            "required_clicks must be at least 2".to_string(),
        ));
    }
    if challenge.current_clicks < 1 || challenge.current_clicks >= challenge.required_clicks {
        return Err(DataError::Invalid(format!(
            "current_clicks {} outside 1..{}",
            challenge.current_clicks, challenge.required_clicks
        )));
    }

    if data.agent_chat.id.is_empty() {
        return Err(DataError::Missing("agent_chat.id"));
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::ChatRole;

    #[test]
    fn test_embedded_snapshot_is_valid() {
        let provider = SampleDataProvider::load().unwrap();
        let data = provider.data();

        assert_eq!(data.user_progress.level, 7);
        assert_eq!(data.user_progress.level_title, "Verkaufsprofi");
        assert_eq!(data.revenue.total, 12450);
        assert_eq!(data.revenue.warranty, 950);
        assert_eq!(data.revenue_history.len(), 6);
        assert_eq!(data.agent_chat.id, "sales-chat-1");
        assert_eq!(data.agent_chat.messages.len(), 3);
        assert_eq!(data.agent_chat.messages[1].role, ChatRole::User);
        assert_eq!(data.bubble_challenge.required_clicks, 5);
        assert_eq!(data.bubble_challenge.reward, 50);
        assert_eq!(data.current_user().unwrap().name, "Max Mustermann");
    }

    #[test]
    fn test_snapshot_is_identical_every_time() {
        let provider = SampleDataProvider::load().unwrap();
        assert_eq!(provider.snapshot(), provider.snapshot());
    }

    #[test]
    fn test_shop_order_is_fixed() {
        let provider = SampleDataProvider::load().unwrap();
        let names: Vec<_> = provider
            .data()
            .shop_performance
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Shop Berlin", "Shop Hamburg", "Shop München", "Shop Köln"]
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = SampleDataProvider::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let err = SampleDataProvider::from_json(r#"{"revenue": {}}"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_invalid_performance_is_rejected() {
        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.shop_performance[2].performance = 120;
        assert!(matches!(validate(&data), Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.shop_performance[0].color = "red\" onclick=\"x".to_string();
        assert!(matches!(validate(&data), Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_ranking_gaps_are_rejected() {
        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.ranking[3].rank = 7;
        assert!(validate(&data).is_err());

        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.ranking[1].is_current_user = true;
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.revenue_history.clear();
        assert!(matches!(
            validate(&data),
            Err(DataError::Missing("revenue_history"))
        ));
    }

    #[test]
    fn test_challenge_bounds() {
        let mut data = SampleDataProvider::load().unwrap().snapshot();
        data.bubble_challenge.current_clicks = 0;
        assert!(validate(&data).is_err());

        data.bubble_challenge.current_clicks = 1;
        data.bubble_challenge.required_clicks = 1;
        assert!(validate(&data).is_err());
    }
}
