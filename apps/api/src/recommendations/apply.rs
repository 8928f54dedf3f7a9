//! Apply and feedback operations on stored recommendations.
//!
//! Applying a timeline recommendation materializes pending tasks; applying
//! a budget recommendation materializes budget items for under-allocated
//! categories. The writes are sequential and NOT atomic: a failure partway
//! leaves earlier rows created and the recommendation unmarked, matching
//! the documented best-effort model.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::TaskRow;
use crate::models::recommendation::{RecommendationDetails, RecommendationRow};

/// User verdict on a recommendation. Write-once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationFeedback {
    Positive,
    Negative,
}

impl RecommendationFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationFeedback::Positive => "positive",
            RecommendationFeedback::Negative => "negative",
        }
    }
}

/// What applying a recommendation created.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyOutcome {
    pub event_id: Uuid,
    pub created_tasks: u32,
    pub created_budget_items: u32,
}

async fn load_recommendation(
    pool: &PgPool,
    recommendation_id: Uuid,
) -> Result<RecommendationRow, AppError> {
    sqlx::query_as::<_, RecommendationRow>("SELECT * FROM recommendations WHERE id = $1")
        .bind(recommendation_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {recommendation_id} not found")))
}

/// Applies a stored recommendation, creating tasks or budget items as its
/// kind dictates, then marks it applied. Vendor and guest recommendations
/// have nothing to materialize and are only marked.
pub async fn apply_recommendation(
    pool: &PgPool,
    recommendation_id: Uuid,
) -> Result<ApplyOutcome, AppError> {
    let rec = load_recommendation(pool, recommendation_id).await?;
    if rec.applied {
        return Err(AppError::Validation(format!(
            "Recommendation {recommendation_id} has already been applied"
        )));
    }

    let mut outcome = ApplyOutcome {
        event_id: rec.event_id,
        created_tasks: 0,
        created_budget_items: 0,
    };

    match &rec.content.details {
        RecommendationDetails::Timeline(suggestions) => {
            // Re-check against current tasks so applying never duplicates a
            // title that appeared after the recommendation was generated.
            let existing: Vec<TaskRow> =
                sqlx::query_as("SELECT * FROM tasks WHERE event_id = $1")
                    .bind(rec.event_id)
                    .fetch_all(pool)
                    .await?;

            for suggestion in suggestions {
                if existing
                    .iter()
                    .any(|t| t.title.eq_ignore_ascii_case(&suggestion.title))
                {
                    continue;
                }
                sqlx::query(
                    r#"
                    INSERT INTO tasks (id, event_id, title, status, priority, due_date, created_at)
                    VALUES ($1, $2, $3, 'pending', $4, $5, $6)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(rec.event_id)
                .bind(&suggestion.title)
                .bind(&suggestion.priority)
                .bind(Utc::now() + Duration::days(suggestion.due_in_days))
                .bind(Utc::now())
                .execute(pool)
                .await?;
                outcome.created_tasks += 1;
            }
        }
        RecommendationDetails::Budget(allocations) => {
            for allocation in allocations {
                let shortfall = allocation.amount - allocation.allocated;
                if shortfall <= 0.0 {
                    continue;
                }
                sqlx::query(
                    r#"
                    INSERT INTO budget_items
                        (id, event_id, category, item_name, estimated_cost, paid, created_at)
                    VALUES ($1, $2, $3, $4, $5, false, $6)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(rec.event_id)
                .bind(allocation.category.as_str())
                .bind(format!("Planned {} allocation", allocation.category.as_str()))
                .bind(shortfall)
                .bind(Utc::now())
                .execute(pool)
                .await?;
                outcome.created_budget_items += 1;
            }
        }
        RecommendationDetails::Vendor(_) | RecommendationDetails::Guest(_) => {}
    }

    sqlx::query("UPDATE recommendations SET applied = true WHERE id = $1")
        .bind(recommendation_id)
        .execute(pool)
        .await?;

    info!(
        "Applied recommendation {recommendation_id}: {} tasks, {} budget items created",
        outcome.created_tasks, outcome.created_budget_items
    );

    Ok(outcome)
}

/// Records the user's verdict on a recommendation. Write-once: a second
/// attempt is rejected before any write.
pub async fn set_recommendation_feedback(
    pool: &PgPool,
    recommendation_id: Uuid,
    feedback: RecommendationFeedback,
) -> Result<(), AppError> {
    let rec = load_recommendation(pool, recommendation_id).await?;
    if rec.user_feedback.is_some() {
        return Err(AppError::Validation(format!(
            "Feedback for recommendation {recommendation_id} has already been recorded"
        )));
    }

    sqlx::query("UPDATE recommendations SET user_feedback = $1 WHERE id = $2")
        .bind(feedback.as_str())
        .bind(recommendation_id)
        .execute(pool)
        .await?;

    Ok(())
}
