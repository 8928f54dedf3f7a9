//! User preferences: lazily created with defaults on first access.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::preferences::{BudgetSensitivity, UserPreferencesRow};
use crate::state::AppState;

/// Fetches a user's preferences, inserting the default row first if none
/// exists yet. The insert is ON CONFLICT DO NOTHING so two concurrent first
/// accesses cannot fail.
pub async fn get_or_create_preferences(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<UserPreferencesRow, AppError> {
    let existing: Option<UserPreferencesRow> =
        sqlx::query_as("SELECT * FROM user_preferences WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    if let Some(prefs) = existing {
        return Ok(prefs);
    }

    debug!("Creating default preferences for user {user_id}");
    sqlx::query(
        r#"
        INSERT INTO user_preferences
            (user_id, budget_sensitivity, preferred_vendor_categories, preferred_styles, created_at)
        VALUES ($1, 'medium', '{}', '{}', $2)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let prefs: UserPreferencesRow =
        sqlx::query_as("SELECT * FROM user_preferences WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(prefs)
}

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub budget_sensitivity: BudgetSensitivity,
    pub preferred_vendor_categories: Vec<String>,
    pub preferred_styles: Vec<String>,
}

/// GET /api/v1/users/:id/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserPreferencesRow>, AppError> {
    let prefs = get_or_create_preferences(&state.db, user_id).await?;
    Ok(Json(prefs))
}

/// PUT /api/v1/users/:id/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<UserPreferencesRow>, AppError> {
    // Lazy-create first so an update for a brand-new user still lands.
    get_or_create_preferences(&state.db, user_id).await?;

    let prefs: UserPreferencesRow = sqlx::query_as(
        r#"
        UPDATE user_preferences
        SET budget_sensitivity = $1,
            preferred_vendor_categories = $2,
            preferred_styles = $3
        WHERE user_id = $4
        RETURNING *
        "#,
    )
    .bind(req.budget_sensitivity.as_str())
    .bind(&req.preferred_vendor_categories)
    .bind(&req.preferred_styles)
    .bind(user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(prefs))
}
