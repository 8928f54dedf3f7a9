use sqlx::PgPool;

use crate::completion::CompletionClient;
use crate::notify::ChangeNotifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub completions: CompletionClient,
    /// Refresh-trigger channel; consumers subscribe, engine handlers publish.
    pub changes: ChangeNotifier,
}
