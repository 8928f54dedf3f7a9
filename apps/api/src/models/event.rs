use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Event categories driving all per-type lookup tables in the engines.
///
/// Stored as lowercase text in the DB. Unknown values parse to `Other`
/// so a bad row never turns into an error (engines fall back to default
/// templates instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Conference,
    #[default]
    Other,
}

impl EventType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "wedding" => EventType::Wedding,
            "corporate" => EventType::Corporate,
            "birthday" => EventType::Birthday,
            "conference" => EventType::Conference,
            _ => EventType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Conference => "conference",
            EventType::Other => "other",
        }
    }
}

/// The fixed budget category set used by allocation tables and budget items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Venue,
    Catering,
    Photography,
    Decor,
    Entertainment,
    Attire,
}

impl BudgetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Venue => "venue",
            BudgetCategory::Catering => "catering",
            BudgetCategory::Photography => "photography",
            BudgetCategory::Decor => "decor",
            BudgetCategory::Entertainment => "entertainment",
            BudgetCategory::Attire => "attire",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub event_type: String,
    pub budget: f64,
    pub estimated_guests: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EventRow {
    pub fn event_type(&self) -> EventType {
        EventType::parse(&self.event_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BudgetItemRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub category: String,
    pub item_name: String,
    pub estimated_cost: f64,
    pub actual_cost: Option<f64>,
    pub paid: bool,
    pub vendor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub rsvp_status: String,
    pub plus_ones: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_parse_is_case_insensitive() {
        assert_eq!(EventType::parse("Wedding"), EventType::Wedding);
        assert_eq!(EventType::parse("CORPORATE"), EventType::Corporate);
        assert_eq!(EventType::parse("birthday"), EventType::Birthday);
    }

    #[test]
    fn test_unknown_event_type_falls_back_to_other() {
        assert_eq!(EventType::parse("quinceanera"), EventType::Other);
        assert_eq!(EventType::parse(""), EventType::Other);
    }

    #[test]
    fn test_event_type_round_trips_through_as_str() {
        for t in [
            EventType::Wedding,
            EventType::Corporate,
            EventType::Birthday,
            EventType::Conference,
            EventType::Other,
        ] {
            assert_eq!(EventType::parse(t.as_str()), t);
        }
    }

    #[test]
    fn test_budget_category_strings_are_distinct() {
        let all = [
            BudgetCategory::Venue,
            BudgetCategory::Catering,
            BudgetCategory::Photography,
            BudgetCategory::Decor,
            BudgetCategory::Entertainment,
            BudgetCategory::Attire,
        ];
        let strs: Vec<&str> = all.iter().map(|c| c.as_str()).collect();
        for (i, a) in strs.iter().enumerate() {
            for b in &strs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
