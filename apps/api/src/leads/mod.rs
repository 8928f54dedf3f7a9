// Vendor lead matching: scoring is delegated to the external completion
// service through the completion module; no scoring logic lives here
// beyond normalizing what comes back.

pub mod handlers;
pub mod matching;
pub mod prompts;
