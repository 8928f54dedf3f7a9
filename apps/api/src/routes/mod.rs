pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::feedback::handlers as feedback_handlers;
use crate::leads::handlers as lead_handlers;
use crate::preferences;
use crate::recommendations::handlers as rec_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Preferences
        .route(
            "/api/v1/users/:id/preferences",
            get(preferences::handle_get_preferences).put(preferences::handle_update_preferences),
        )
        // Recommendations
        .route(
            "/api/v1/events/:id/recommendations",
            get(rec_handlers::handle_list_recommendations)
                .post(rec_handlers::handle_run_recommendations),
        )
        .route(
            "/api/v1/recommendations/:id/apply",
            post(rec_handlers::handle_apply_recommendation),
        )
        .route(
            "/api/v1/recommendations/:id/feedback",
            post(rec_handlers::handle_recommendation_feedback),
        )
        // Vendor leads
        .route(
            "/api/v1/vendors/:id/leads",
            get(lead_handlers::handle_list_leads).post(lead_handlers::handle_match_leads),
        )
        .route(
            "/api/v1/leads/:id/status",
            patch(lead_handlers::handle_update_lead_status),
        )
        // Feedback analysis
        .route(
            "/api/v1/events/:id/feedback/analysis",
            get(feedback_handlers::handle_get_analysis)
                .post(feedback_handlers::handle_run_analysis),
        )
        .with_state(state)
}
