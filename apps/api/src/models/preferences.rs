use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// How strongly budget allocations should be skewed toward cost control.
/// Unknown values parse to `Medium` (the no-adjustment default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetSensitivity {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetSensitivity {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "low" => BudgetSensitivity::Low,
            "high" => BudgetSensitivity::High,
            _ => BudgetSensitivity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetSensitivity::Low => "low",
            BudgetSensitivity::Medium => "medium",
            BudgetSensitivity::High => "high",
        }
    }
}

/// Per-user preferences biasing the recommendation engine.
/// Created lazily with defaults on first access.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPreferencesRow {
    pub user_id: Uuid,
    pub budget_sensitivity: String,
    pub preferred_vendor_categories: Vec<String>,
    pub preferred_styles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserPreferencesRow {
    pub fn budget_sensitivity(&self) -> BudgetSensitivity {
        BudgetSensitivity::parse(&self.budget_sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitivity_default_is_medium() {
        assert_eq!(BudgetSensitivity::default(), BudgetSensitivity::Medium);
        assert_eq!(BudgetSensitivity::parse("whatever"), BudgetSensitivity::Medium);
    }

    #[test]
    fn test_sensitivity_parse_round_trips() {
        for s in [
            BudgetSensitivity::Low,
            BudgetSensitivity::Medium,
            BudgetSensitivity::High,
        ] {
            assert_eq!(BudgetSensitivity::parse(s.as_str()), s);
        }
    }
}
