//! Recommendation pipeline: loads an event's current state, runs the four
//! generators, and persists the results.
//!
//! Flow: load event + tasks + budget items + guests → resolve preferences
//! (lazily created) → generate 0–4 contents → INSERT one row per content.
//!
//! The INSERT loop is a best-effort sequence of independent writes, same as
//! the apply path. Two overlapping runs for one event can both persist.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::{BudgetItemRow, EventRow, GuestRow, TaskRow};
use crate::models::preferences::UserPreferencesRow;
use crate::models::recommendation::{RecommendationContent, RecommendationRow};
use crate::preferences::get_or_create_preferences;
use crate::recommendations::{budget, guest, timeline, vendors};

/// Produces 0–4 recommendation contents (budget, vendor, timeline, guest)
/// from an event's current state. Pure: no I/O, `now` injected for testing.
pub fn generate_recommendations(
    event: &EventRow,
    tasks: &[TaskRow],
    budget_items: &[BudgetItemRow],
    guests: &[GuestRow],
    prefs: &UserPreferencesRow,
    now: DateTime<Utc>,
) -> Vec<RecommendationContent> {
    let event_type = event.event_type();
    let confirmed = guests
        .iter()
        .filter(|g| g.rsvp_status.eq_ignore_ascii_case("confirmed"))
        .count();

    [
        budget::build_budget_recommendation(event, budget_items, prefs.budget_sensitivity()),
        vendors::build_vendor_recommendation(event_type, &prefs.preferred_vendor_categories),
        timeline::build_timeline_recommendation(event_type, event.start_date, now, tasks),
        guest::build_guest_recommendation(event_type, event.estimated_guests, confirmed),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Runs the full pipeline for one event and persists each recommendation.
pub async fn run_recommendations(
    pool: &PgPool,
    event_id: Uuid,
) -> Result<Vec<RecommendationRow>, AppError> {
    let event: EventRow = sqlx::query_as("SELECT * FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {event_id} not found")))?;

    let tasks: Vec<TaskRow> = sqlx::query_as("SELECT * FROM tasks WHERE event_id = $1")
        .bind(event_id)
        .fetch_all(pool)
        .await?;

    let budget_items: Vec<BudgetItemRow> =
        sqlx::query_as("SELECT * FROM budget_items WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(pool)
            .await?;

    let guests: Vec<GuestRow> = sqlx::query_as("SELECT * FROM guests WHERE event_id = $1")
        .bind(event_id)
        .fetch_all(pool)
        .await?;

    let prefs = get_or_create_preferences(pool, event.user_id).await?;

    debug!(
        "Loaded state for event {event_id}: {} tasks, {} budget items, {} guests",
        tasks.len(),
        budget_items.len(),
        guests.len()
    );

    let contents =
        generate_recommendations(&event, &tasks, &budget_items, &guests, &prefs, Utc::now());

    let mut rows = Vec::with_capacity(contents.len());
    for content in contents {
        let row = RecommendationRow {
            id: Uuid::new_v4(),
            event_id,
            kind: content.details.kind().as_str().to_string(),
            content: Json(content),
            applied: false,
            user_feedback: None,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO recommendations (id, event_id, kind, content, applied, created_at)
            VALUES ($1, $2, $3, $4, false, $5)
            "#,
        )
        .bind(row.id)
        .bind(row.event_id)
        .bind(&row.kind)
        .bind(&row.content)
        .bind(row.created_at)
        .execute(pool)
        .await?;

        rows.push(row);
    }

    info!(
        "Generated {} recommendations for event {event_id}",
        rows.len()
    );

    Ok(rows)
}
