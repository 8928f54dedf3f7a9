//! Guest-experience ideas: fixed per-event-type lists, suppressed only for
//! events with no expected guests.

use crate::models::event::EventType;
use crate::models::recommendation::{RecommendationContent, RecommendationDetails};

/// Static confidence weight for guest-experience recommendations.
pub const CONFIDENCE: u8 = 75;

/// Idea lists per event type. Types without a list fall back to the
/// Wedding ideas.
fn idea_list(event_type: EventType) -> &'static [&'static str] {
    match event_type {
        EventType::Wedding | EventType::Other => &[
            "Set up a photo booth with props",
            "Offer welcome drinks on arrival",
            "Provide a late-night snack station",
            "Create a shared playlist guests can add to",
        ],
        EventType::Corporate => &[
            "Run an icebreaker activity before sessions",
            "Offer a barista coffee station",
            "Provide branded swag bags",
        ],
        EventType::Birthday => &[
            "Organize party games with small prizes",
            "Set up a DIY dessert decorating table",
            "Prepare personalized party favors",
        ],
        EventType::Conference => &[
            "Host a speed-networking session",
            "Provide charging stations near seating",
            "Offer a quiet room for calls and breaks",
        ],
    }
}

/// Builds the guest-experience recommendation. Only suppressed when the
/// event expects no guests at all.
pub fn build_guest_recommendation(
    event_type: EventType,
    estimated_guests: i32,
    confirmed_guests: usize,
) -> Option<RecommendationContent> {
    if estimated_guests == 0 {
        return None;
    }

    let ideas = idea_list(event_type)
        .iter()
        .map(|s| s.to_string())
        .collect();

    Some(RecommendationContent {
        title: "Guest experience ideas".to_string(),
        description: format!(
            "Ways to make the event memorable for your {estimated_guests} expected guests \
             ({confirmed_guests} confirmed so far)."
        ),
        confidence: CONFIDENCE,
        details: RecommendationDetails::Guest(ideas),
    })
}
