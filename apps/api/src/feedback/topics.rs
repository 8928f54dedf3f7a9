//! Topic extraction: fixed feedback themes tracked via keyword
//! dictionaries over comment text.

use serde::{Deserialize, Serialize};

/// The fixed topic set. Order here is the tiebreak order for equal
/// mention counts.
pub const TOPICS: &[(&str, &[&str])] = &[
    ("Service", &["service", "waiter", "server", "attentive", "responsive"]),
    ("Food", &["food", "meal", "menu", "dish", "catering", "taste", "dessert"]),
    ("Venue", &["venue", "location", "hall", "room", "space", "parking"]),
    ("Staff", &["staff", "team", "coordinator", "manager", "crew"]),
    ("Music", &["music", "dj", "band", "song", "dance", "playlist"]),
    ("Decorations", &["decor", "decoration", "flower", "centerpiece", "lighting", "theme"]),
    ("Organization", &["organization", "organized", "schedule", "timing", "planning", "delay"]),
];

/// Aggregated per-topic result: how often it came up and the mean sentiment
/// of the entries that mentioned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: String,
    pub mentions: u32,
    pub average_sentiment: f64,
}

/// Scans scored comments for topic keyword hits. An entry counts at most
/// once per topic regardless of how many of its keywords appear. Topics
/// nobody mentioned are dropped; the rest are sorted by mentions descending.
pub fn extract_topics(scored_comments: &[(&str, f64)]) -> Vec<TopicSummary> {
    let mut summaries: Vec<TopicSummary> = Vec::new();

    for (topic, keywords) in TOPICS {
        let mut mentions = 0u32;
        let mut sentiment_sum = 0.0f64;

        for (comment, sentiment) in scored_comments {
            let lower = comment.to_lowercase();
            if keywords.iter().any(|k| lower.contains(k)) {
                mentions += 1;
                sentiment_sum += sentiment;
            }
        }

        if mentions > 0 {
            summaries.push(TopicSummary {
                topic: topic.to_string(),
                mentions,
                average_sentiment: sentiment_sum / mentions as f64,
            });
        }
    }

    // Stable sort keeps the fixed topic order for ties
    summaries.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    summaries
}
