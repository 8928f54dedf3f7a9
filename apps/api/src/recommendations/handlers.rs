//! Axum route handlers for the recommendation API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::RecommendationRow;
use crate::notify::ChangedEntity;
use crate::recommendations::apply::{
    apply_recommendation, set_recommendation_feedback, ApplyOutcome, RecommendationFeedback,
};
use crate::recommendations::engine::run_recommendations;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationRow>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: RecommendationFeedback,
}

/// POST /api/v1/events/:id/recommendations
///
/// Runs the engine against the event's current state and persists the
/// resulting recommendations. Re-running appends new rows; nothing is
/// auto-deleted.
pub async fn handle_run_recommendations(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = run_recommendations(&state.db, event_id).await?;
    state.changes.publish(ChangedEntity::Recommendations, event_id);
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// GET /api/v1/events/:id/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations: Vec<RecommendationRow> = sqlx::query_as(
        "SELECT * FROM recommendations WHERE event_id = $1 ORDER BY created_at DESC",
    )
    .bind(event_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// POST /api/v1/recommendations/:id/apply
pub async fn handle_apply_recommendation(
    State(state): State<AppState>,
    Path(recommendation_id): Path<Uuid>,
) -> Result<Json<ApplyOutcome>, AppError> {
    let outcome = apply_recommendation(&state.db, recommendation_id).await?;
    if outcome.created_tasks > 0 {
        state.changes.publish(ChangedEntity::Tasks, outcome.event_id);
    }
    if outcome.created_budget_items > 0 {
        state.changes.publish(ChangedEntity::BudgetItems, outcome.event_id);
    }
    Ok(Json(outcome))
}

/// POST /api/v1/recommendations/:id/feedback
pub async fn handle_recommendation_feedback(
    State(state): State<AppState>,
    Path(recommendation_id): Path<Uuid>,
    Json(req): Json<FeedbackRequest>,
) -> Result<StatusCode, AppError> {
    set_recommendation_feedback(&state.db, recommendation_id, req.feedback).await?;
    Ok(StatusCode::NO_CONTENT)
}
