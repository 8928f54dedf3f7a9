use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::event::BudgetCategory;

/// The four recommendation kinds the engine can emit for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Budget,
    Vendor,
    Timeline,
    Guest,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Budget => "budget",
            RecommendationKind::Vendor => "vendor",
            RecommendationKind::Timeline => "timeline",
            RecommendationKind::Guest => "guest",
        }
    }
}

/// One proposed budget allocation for a category: the suggested amount
/// against what existing budget items already cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: BudgetCategory,
    pub amount: f64,
    pub allocated: f64,
}

/// A sample vendor surfaced by the vendor recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSuggestion {
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub price_range: String,
}

/// A planning task proposed by the timeline recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub title: String,
    pub priority: String,
    pub due_in_days: i64,
}

/// Kind-specific recommendation payload.
///
/// A tagged union rather than an untyped blob: each kind carries its own
/// detail schema, and the tag doubles as the stored `kind` column value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum RecommendationDetails {
    Budget(Vec<BudgetAllocation>),
    Vendor(Vec<VendorSuggestion>),
    Timeline(Vec<TaskSuggestion>),
    Guest(Vec<String>),
}

impl RecommendationDetails {
    pub fn kind(&self) -> RecommendationKind {
        match self {
            RecommendationDetails::Budget(_) => RecommendationKind::Budget,
            RecommendationDetails::Vendor(_) => RecommendationKind::Vendor,
            RecommendationDetails::Timeline(_) => RecommendationKind::Timeline,
            RecommendationDetails::Guest(_) => RecommendationKind::Guest,
        }
    }
}

/// Engine-produced recommendation content, persisted as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationContent {
    pub title: String,
    pub description: String,
    /// Static per-kind confidence weight, 0–100. Not computed from data.
    pub confidence: u8,
    pub details: RecommendationDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub kind: String,
    pub content: Json<RecommendationContent>,
    pub applied: bool,
    pub user_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_tag_matches_kind() {
        let details = RecommendationDetails::Timeline(vec![TaskSuggestion {
            title: "Book venue".to_string(),
            priority: "high".to_string(),
            due_in_days: 14,
        }]);
        assert_eq!(details.kind(), RecommendationKind::Timeline);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["kind"], "timeline");
        assert_eq!(json["items"][0]["title"], "Book venue");
    }

    #[test]
    fn test_budget_details_deserialize_from_tagged_json() {
        let json = r#"{
            "kind": "budget",
            "items": [
                {"category": "venue", "amount": 4000.0, "allocated": 1200.0}
            ]
        }"#;
        let details: RecommendationDetails = serde_json::from_str(json).unwrap();
        match details {
            RecommendationDetails::Budget(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].category, BudgetCategory::Venue);
                assert!((items[0].amount - 4000.0).abs() < f64::EPSILON);
            }
            other => panic!("Expected budget details, got {other:?}"),
        }
    }

    #[test]
    fn test_guest_details_are_plain_idea_strings() {
        let details = RecommendationDetails::Guest(vec![
            "Photo booth".to_string(),
            "Welcome drinks".to_string(),
        ]);
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["kind"], "guest");
        assert_eq!(json["items"][1], "Welcome drinks");
    }
}
