use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scored match between a vendor and an upcoming event.
///
/// Unique on (vendor_id, event_id). Re-running the matcher overwrites
/// score, reason and approach but never the contact status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VendorLeadRow {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub event_id: Uuid,
    pub match_score: i32,
    pub match_reason: String,
    pub suggested_approach: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
