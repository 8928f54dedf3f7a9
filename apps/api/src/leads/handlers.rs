//! Axum route handlers for the vendor leads API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::leads::matching::match_vendor_to_events;
use crate::models::lead::VendorLeadRow;
use crate::notify::ChangedEntity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchLeadsRequest {
    pub services: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<VendorLeadRow>,
}

#[derive(Debug, Deserialize)]
pub struct LeadStatusRequest {
    pub status: LeadStatus,
}

/// Lead contact status. `New` is set on creation; the matcher never
/// moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
}

impl LeadStatus {
    fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
        }
    }
}

/// POST /api/v1/vendors/:id/leads
///
/// Scores the vendor's services against all upcoming events via the
/// completion service and upserts the matches. Completion failures abort
/// the whole batch; the caller retries manually.
pub async fn handle_match_leads(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
    Json(req): Json<MatchLeadsRequest>,
) -> Result<Json<LeadsResponse>, AppError> {
    if req.services.is_empty() {
        return Err(AppError::Validation(
            "services cannot be empty".to_string(),
        ));
    }

    let leads =
        match_vendor_to_events(&state.db, &state.completions, vendor_id, &req.services).await?;
    state.changes.publish(ChangedEntity::VendorLeads, vendor_id);
    Ok(Json(LeadsResponse { leads }))
}

/// GET /api/v1/vendors/:id/leads
pub async fn handle_list_leads(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<Json<LeadsResponse>, AppError> {
    let leads: Vec<VendorLeadRow> = sqlx::query_as(
        "SELECT * FROM vendor_leads WHERE vendor_id = $1 ORDER BY match_score DESC",
    )
    .bind(vendor_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(LeadsResponse { leads }))
}

/// PATCH /api/v1/leads/:id/status
pub async fn handle_update_lead_status(
    State(state): State<AppState>,
    Path(lead_id): Path<Uuid>,
    Json(req): Json<LeadStatusRequest>,
) -> Result<Json<VendorLeadRow>, AppError> {
    let lead: Option<VendorLeadRow> = sqlx::query_as(
        "UPDATE vendor_leads SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
    )
    .bind(req.status.as_str())
    .bind(Utc::now())
    .bind(lead_id)
    .fetch_optional(&state.db)
    .await?;

    let lead = lead.ok_or_else(|| AppError::NotFound(format!("Lead {lead_id} not found")))?;
    state.changes.publish(ChangedEntity::VendorLeads, lead.vendor_id);
    Ok(Json(lead))
}
