//! Axum route handlers for the feedback analysis API.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::analysis::run_feedback_analysis;
use crate::models::feedback::FeedbackAnalysisRow;
use crate::notify::ChangedEntity;
use crate::state::AppState;

/// POST /api/v1/events/:id/feedback/analysis
///
/// Recomputes the event's analysis from its full feedback set and
/// overwrites the stored row. Running against an event with no feedback is
/// a validation error and writes nothing.
pub async fn handle_run_analysis(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<FeedbackAnalysisRow>, AppError> {
    let row = run_feedback_analysis(&state.db, event_id).await?;
    state.changes.publish(ChangedEntity::FeedbackAnalysis, event_id);
    Ok(Json(row))
}

/// GET /api/v1/events/:id/feedback/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<FeedbackAnalysisRow>, AppError> {
    let row: Option<FeedbackAnalysisRow> =
        sqlx::query_as("SELECT * FROM feedback_analyses WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No analysis stored for event {event_id}")))
}
