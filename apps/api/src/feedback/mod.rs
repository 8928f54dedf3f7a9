// Feedback analysis engine: per-entry sentiment scoring, keyword-based
// topic extraction, and derived improvement advice. Entirely local
// arithmetic, no completion calls.

pub mod analysis;
pub mod handlers;
pub mod sentiment;
pub mod topics;
