use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::feedback::topics::TopicSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackEntryRow {
    pub id: Uuid,
    pub event_id: Uuid,
    /// 1–5 star rating.
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One analysis row per event, fully recomputed and overwritten each run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackAnalysisRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub average_rating: f64,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub topics: Json<Vec<TopicSummary>>,
    pub recommendations: Json<Vec<String>>,
    pub analyzed_at: DateTime<Utc>,
}
