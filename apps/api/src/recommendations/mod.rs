// Recommendation engine: budget allocation, vendor suggestions, timeline
// tasks, and guest-experience ideas, each behind its own generator module.
// The generators are pure; engine.rs owns loading and persistence.

pub mod apply;
pub mod budget;
pub mod engine;
pub mod guest;
pub mod handlers;
pub mod timeline;
pub mod vendors;
