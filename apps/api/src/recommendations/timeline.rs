//! Timeline suggestions: planning-task templates bucketed by how far out
//! the event is, with case-insensitive dedup against existing tasks.

use chrono::{DateTime, Utc};

use crate::models::event::{EventType, TaskRow};
use crate::models::recommendation::{
    RecommendationContent, RecommendationDetails, TaskSuggestion,
};

/// Static confidence weight for timeline recommendations.
pub const CONFIDENCE: u8 = 90;

/// How far out the event is, derived from days-until-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    Long,
    Medium,
    Short,
}

/// Maps days-until-event to a time frame. Events already started (negative
/// days) get no timeline recommendation at all.
pub fn time_frame_for(days_until: i64) -> Option<TimeFrame> {
    if days_until < 0 {
        None
    } else if days_until > 90 {
        Some(TimeFrame::Long)
    } else if days_until >= 30 {
        Some(TimeFrame::Medium)
    } else {
        Some(TimeFrame::Short)
    }
}

/// (title, priority, due_in_days) template per event type and time frame.
/// Unknown event types use the Wedding templates.
fn task_templates(event_type: EventType, frame: TimeFrame) -> &'static [(&'static str, &'static str, i64)] {
    use TimeFrame::*;
    match (event_type, frame) {
        (EventType::Wedding | EventType::Other, Long) => &[
            ("Book venue", "high", 14),
            ("Shortlist photographers", "high", 21),
            ("Draft guest list", "medium", 30),
            ("Research caterers", "medium", 30),
        ],
        (EventType::Wedding | EventType::Other, Medium) => &[
            ("Send invitations", "high", 7),
            ("Finalize menu tasting", "high", 14),
            ("Book entertainment", "medium", 14),
            ("Order decorations", "medium", 21),
        ],
        (EventType::Wedding | EventType::Other, Short) => &[
            ("Confirm final headcount", "high", 3),
            ("Confirm vendor arrival times", "high", 5),
            ("Prepare seating chart", "medium", 7),
        ],
        (EventType::Corporate, Long) => &[
            ("Book venue", "high", 14),
            ("Define event agenda", "high", 21),
            ("Reserve AV equipment", "medium", 30),
        ],
        (EventType::Corporate, Medium) => &[
            ("Send calendar invitations", "high", 7),
            ("Confirm catering order", "high", 14),
            ("Brief speakers", "medium", 14),
        ],
        (EventType::Corporate, Short) => &[
            ("Confirm attendee count", "high", 3),
            ("Print badges and signage", "medium", 5),
        ],
        (EventType::Birthday, Long) => &[
            ("Pick a theme", "medium", 14),
            ("Book venue", "high", 21),
        ],
        (EventType::Birthday, Medium) => &[
            ("Send invitations", "high", 7),
            ("Order cake", "high", 14),
            ("Plan party games", "low", 21),
        ],
        (EventType::Birthday, Short) => &[
            ("Confirm RSVPs", "high", 3),
            ("Buy party supplies", "medium", 5),
        ],
        (EventType::Conference, Long) => &[
            ("Book venue", "high", 14),
            ("Open call for speakers", "high", 21),
            ("Launch registration page", "medium", 30),
        ],
        (EventType::Conference, Medium) => &[
            ("Lock speaker schedule", "high", 7),
            ("Confirm catering order", "medium", 14),
            ("Arrange session recording", "medium", 21),
        ],
        (EventType::Conference, Short) => &[
            ("Send attendee logistics email", "high", 3),
            ("Print programs and badges", "medium", 5),
        ],
    }
}

/// True when a template title collides with an existing task title,
/// ignoring case.
fn title_exists(tasks: &[TaskRow], title: &str) -> bool {
    tasks.iter().any(|t| t.title.eq_ignore_ascii_case(title))
}

/// Builds the timeline recommendation. `None` when the event has already
/// started or every template task already exists.
pub fn build_timeline_recommendation(
    event_type: EventType,
    start_date: DateTime<Utc>,
    now: DateTime<Utc>,
    existing_tasks: &[TaskRow],
) -> Option<RecommendationContent> {
    let days_until = (start_date - now).num_days();
    let frame = time_frame_for(days_until)?;

    let suggestions: Vec<TaskSuggestion> = task_templates(event_type, frame)
        .iter()
        .filter(|(title, _, _)| !title_exists(existing_tasks, title))
        .map(|&(title, priority, due_in_days)| TaskSuggestion {
            title: title.to_string(),
            priority: priority.to_string(),
            due_in_days,
        })
        .collect();

    if suggestions.is_empty() {
        return None;
    }

    Some(RecommendationContent {
        title: "Upcoming planning tasks".to_string(),
        description: format!(
            "Tasks to tackle with {days_until} days until the event."
        ),
        confidence: CONFIDENCE,
        details: RecommendationDetails::Timeline(suggestions),
    })
}
