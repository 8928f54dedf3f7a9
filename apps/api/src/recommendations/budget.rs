//! Budget allocation: per-event-type percentage tables adjusted by the
//! user's budget sensitivity, then re-normalized to sum to 1.

use crate::models::event::{BudgetCategory, BudgetItemRow, EventRow, EventType};
use crate::models::preferences::BudgetSensitivity;
use crate::models::recommendation::{
    BudgetAllocation, RecommendationContent, RecommendationDetails,
};

/// Static confidence weight for budget recommendations.
pub const CONFIDENCE: u8 = 85;

/// Suppress the recommendation once existing items cover this share of the
/// total budget: there is nothing meaningful left to allocate.
const ALLOCATION_RATIO_CUTOFF: f64 = 0.9;

/// Baseline allocation percentages per event type, over the full fixed
/// category set. Each table sums to 1.0 before adjustment.
/// Unknown event types use the Wedding table.
fn allocation_table(event_type: EventType) -> [(BudgetCategory, f64); 6] {
    use BudgetCategory::*;
    match event_type {
        EventType::Wedding | EventType::Other => [
            (Venue, 0.40),
            (Catering, 0.30),
            (Photography, 0.10),
            (Decor, 0.10),
            (Entertainment, 0.05),
            (Attire, 0.05),
        ],
        EventType::Corporate => [
            (Venue, 0.35),
            (Catering, 0.30),
            (Photography, 0.05),
            (Decor, 0.10),
            (Entertainment, 0.15),
            (Attire, 0.05),
        ],
        EventType::Birthday => [
            (Venue, 0.25),
            (Catering, 0.35),
            (Photography, 0.05),
            (Decor, 0.15),
            (Entertainment, 0.15),
            (Attire, 0.05),
        ],
        EventType::Conference => [
            (Venue, 0.45),
            (Catering, 0.30),
            (Photography, 0.05),
            (Decor, 0.05),
            (Entertainment, 0.10),
            (Attire, 0.05),
        ],
    }
}

/// Per-category scaling factor for a budget sensitivity level.
fn sensitivity_factor(category: BudgetCategory, sensitivity: BudgetSensitivity) -> f64 {
    use BudgetCategory::*;
    match sensitivity {
        BudgetSensitivity::Medium => 1.0,
        BudgetSensitivity::High => match category {
            Venue | Catering => 0.8,
            Decor | Entertainment => 1.3,
            _ => 1.0,
        },
        BudgetSensitivity::Low => match category {
            Venue | Catering => 1.2,
            _ => 0.9,
        },
    }
}

/// Sensitivity-adjusted allocation percentages, re-normalized to sum to 1.
pub fn adjusted_percentages(
    event_type: EventType,
    sensitivity: BudgetSensitivity,
) -> Vec<(BudgetCategory, f64)> {
    let adjusted: Vec<(BudgetCategory, f64)> = allocation_table(event_type)
        .iter()
        .map(|&(cat, pct)| (cat, pct * sensitivity_factor(cat, sensitivity)))
        .collect();

    let total: f64 = adjusted.iter().map(|(_, pct)| pct).sum();
    adjusted
        .into_iter()
        .map(|(cat, pct)| (cat, pct / total))
        .collect()
}

/// Sum of estimated costs of existing items in one category.
fn allocated_in_category(items: &[BudgetItemRow], category: BudgetCategory) -> f64 {
    items
        .iter()
        .filter(|i| i.category.eq_ignore_ascii_case(category.as_str()))
        .map(|i| i.estimated_cost)
        .sum()
}

/// Builds the budget allocation recommendation, or `None` when the budget
/// is already (near-)fully allocated or there is no budget to divide.
pub fn build_budget_recommendation(
    event: &EventRow,
    items: &[BudgetItemRow],
    sensitivity: BudgetSensitivity,
) -> Option<RecommendationContent> {
    if event.budget <= 0.0 {
        return None;
    }

    let total_allocated: f64 = items.iter().map(|i| i.estimated_cost).sum();
    if total_allocated / event.budget > ALLOCATION_RATIO_CUTOFF {
        return None;
    }

    let allocations: Vec<BudgetAllocation> = adjusted_percentages(event.event_type(), sensitivity)
        .into_iter()
        .map(|(category, pct)| BudgetAllocation {
            category,
            amount: event.budget * pct,
            allocated: allocated_in_category(items, category),
        })
        .collect();

    Some(RecommendationContent {
        title: "Suggested budget allocation".to_string(),
        description: format!(
            "How to divide your {:.0} budget across categories for a {} event ({} budget sensitivity).",
            event.budget,
            event.event_type().as_str(),
            sensitivity.as_str()
        ),
        confidence: CONFIDENCE,
        details: RecommendationDetails::Budget(allocations),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_event(event_type: &str, budget: f64) -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Test event".to_string(),
            event_type: event_type.to_string(),
            budget,
            estimated_guests: 100,
            start_date: Utc::now(),
            end_date: Utc::now(),
            venue_name: None,
            city: None,
            created_at: Utc::now(),
        }
    }

    fn make_item(category: &str, estimated_cost: f64) -> BudgetItemRow {
        BudgetItemRow {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            category: category.to_string(),
            item_name: "item".to_string(),
            estimated_cost,
            actual_cost: None,
            paid: false,
            vendor_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_adjusted_percentages_sum_to_one_for_all_combinations() {
        let types = [
            EventType::Wedding,
            EventType::Corporate,
            EventType::Birthday,
            EventType::Conference,
            EventType::Other,
        ];
        let sensitivities = [
            BudgetSensitivity::Low,
            BudgetSensitivity::Medium,
            BudgetSensitivity::High,
        ];
        for t in types {
            for s in sensitivities {
                let sum: f64 = adjusted_percentages(t, s).iter().map(|(_, p)| p).sum();
                assert!(
                    (sum - 1.0).abs() < 1e-9,
                    "{t:?}/{s:?} summed to {sum}"
                );
            }
        }
    }

    #[test]
    fn test_high_sensitivity_shifts_wedding_allocations() {
        // Pre-normalization: venue/catering scaled x0.8, decor/entertainment x1.3.
        let baseline = adjusted_percentages(EventType::Wedding, BudgetSensitivity::Medium);
        let high = adjusted_percentages(EventType::Wedding, BudgetSensitivity::High);

        let get = |table: &[(BudgetCategory, f64)], cat| {
            table.iter().find(|(c, _)| *c == cat).unwrap().1
        };

        // Normalization rescales everything by the same factor, so ratios
        // between adjusted and baseline categories reflect the raw factors.
        let venue_ratio = get(&high, BudgetCategory::Venue) / get(&baseline, BudgetCategory::Venue);
        let decor_ratio = get(&high, BudgetCategory::Decor) / get(&baseline, BudgetCategory::Decor);
        assert!(
            (decor_ratio / venue_ratio - 1.3 / 0.8).abs() < 1e-9,
            "decor/venue relative shift was {}",
            decor_ratio / venue_ratio
        );
        assert!(venue_ratio < 1.0, "venue share must shrink under high sensitivity");
        assert!(decor_ratio > 1.0, "decor share must grow under high sensitivity");
    }

    #[test]
    fn test_wedding_high_example_amounts() {
        // Spec'd worked example: $10,000 wedding budget, high sensitivity.
        let event = make_event("wedding", 10_000.0);
        let rec =
            build_budget_recommendation(&event, &[], BudgetSensitivity::High).expect("emitted");
        let RecommendationDetails::Budget(allocations) = &rec.details else {
            panic!("expected budget details");
        };

        let total: f64 = allocations.iter().map(|a| a.amount).sum();
        assert!((total - 10_000.0).abs() < 1e-6, "amounts must sum to the budget");

        let venue = allocations
            .iter()
            .find(|a| a.category == BudgetCategory::Venue)
            .unwrap();
        // Baseline 40% reduced ~20% pre-normalization: 0.32 / 0.905 of $10k.
        assert!(
            (venue.amount - 10_000.0 * 0.32 / 0.905).abs() < 1e-6,
            "venue amount was {}",
            venue.amount
        );
    }

    #[test]
    fn test_skipped_when_allocation_ratio_exceeds_cutoff() {
        let event = make_event("wedding", 1000.0);
        let items = vec![make_item("venue", 950.0)];
        assert!(build_budget_recommendation(&event, &items, BudgetSensitivity::Medium).is_none());
    }

    #[test]
    fn test_emitted_at_or_below_cutoff() {
        let event = make_event("wedding", 1000.0);
        let items = vec![make_item("venue", 900.0)];
        assert!(build_budget_recommendation(&event, &items, BudgetSensitivity::Medium).is_some());
    }

    #[test]
    fn test_zero_budget_suppressed() {
        let event = make_event("wedding", 0.0);
        assert!(build_budget_recommendation(&event, &[], BudgetSensitivity::Medium).is_none());
    }

    #[test]
    fn test_allocated_sums_match_existing_items_case_insensitively() {
        let event = make_event("birthday", 5000.0);
        let items = vec![make_item("Catering", 300.0), make_item("catering", 200.0)];
        let rec =
            build_budget_recommendation(&event, &items, BudgetSensitivity::Medium).unwrap();
        let RecommendationDetails::Budget(allocations) = &rec.details else {
            panic!("expected budget details");
        };
        let catering = allocations
            .iter()
            .find(|a| a.category == BudgetCategory::Catering)
            .unwrap();
        assert!((catering.allocated - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_event_type_uses_wedding_table() {
        assert_eq!(
            adjusted_percentages(EventType::Other, BudgetSensitivity::Medium),
            adjusted_percentages(EventType::Wedding, BudgetSensitivity::Medium)
        );
    }

    #[test]
    fn test_confidence_is_static() {
        let event = make_event("conference", 20_000.0);
        let rec = build_budget_recommendation(&event, &[], BudgetSensitivity::Low).unwrap();
        assert_eq!(rec.confidence, 85);
    }
}
