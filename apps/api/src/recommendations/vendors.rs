//! Vendor suggestions: curated sample vendors per event type, filtered by
//! the user's preferred categories when any overlap exists.

use crate::models::event::EventType;
use crate::models::recommendation::{
    RecommendationContent, RecommendationDetails, VendorSuggestion,
};

/// Static confidence weight for vendor recommendations.
pub const CONFIDENCE: u8 = 80;

/// How many vendors to surface per recommendation.
const TOP_N: usize = 3;

struct SampleVendor {
    name: &'static str,
    category: &'static str,
    rating: f64,
    price_range: &'static str,
}

/// Curated sample vendors per event type. Types without a table produce no
/// vendor recommendation at all.
fn vendor_table(event_type: EventType) -> Option<&'static [SampleVendor]> {
    match event_type {
        EventType::Wedding => Some(&[
            SampleVendor { name: "Grand Ballroom Estates", category: "venue", rating: 4.8, price_range: "$$$" },
            SampleVendor { name: "Everlight Photography", category: "photography", rating: 4.9, price_range: "$$" },
            SampleVendor { name: "Rosewood Catering Co.", category: "catering", rating: 4.7, price_range: "$$" },
            SampleVendor { name: "Petal & Vine Florals", category: "decor", rating: 4.6, price_range: "$$" },
            SampleVendor { name: "String Quartet Collective", category: "entertainment", rating: 4.5, price_range: "$$$" },
        ]),
        EventType::Corporate => Some(&[
            SampleVendor { name: "Summit Conference Center", category: "venue", rating: 4.6, price_range: "$$$" },
            SampleVendor { name: "Executive Eats Catering", category: "catering", rating: 4.5, price_range: "$$" },
            SampleVendor { name: "Stagecraft AV Services", category: "entertainment", rating: 4.7, price_range: "$$" },
            SampleVendor { name: "Brandline Event Decor", category: "decor", rating: 4.3, price_range: "$" },
        ]),
        EventType::Birthday => Some(&[
            SampleVendor { name: "Partyhouse Venues", category: "venue", rating: 4.4, price_range: "$" },
            SampleVendor { name: "Sweet Layers Bakery", category: "catering", rating: 4.8, price_range: "$" },
            SampleVendor { name: "DJ Nova Events", category: "entertainment", rating: 4.6, price_range: "$$" },
            SampleVendor { name: "Balloon Artistry Studio", category: "decor", rating: 4.5, price_range: "$" },
        ]),
        EventType::Conference => Some(&[
            SampleVendor { name: "Metro Convention Hall", category: "venue", rating: 4.7, price_range: "$$$" },
            SampleVendor { name: "Keynote Catering Group", category: "catering", rating: 4.4, price_range: "$$" },
            SampleVendor { name: "ClearSignal AV", category: "entertainment", rating: 4.8, price_range: "$$" },
        ]),
        EventType::Other => None,
    }
}

/// Builds the vendor recommendation: filter by preferred categories when the
/// intersection is non-empty, sort by rating descending, take the top 3.
pub fn build_vendor_recommendation(
    event_type: EventType,
    preferred_categories: &[String],
) -> Option<RecommendationContent> {
    let table = vendor_table(event_type)?;

    let preferred: Vec<&SampleVendor> = table
        .iter()
        .filter(|v| {
            preferred_categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(v.category))
        })
        .collect();

    // Preference filter only applies when it leaves something to suggest.
    let mut pool: Vec<&SampleVendor> = if preferred.is_empty() {
        table.iter().collect()
    } else {
        preferred
    };

    pool.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));

    let suggestions: Vec<VendorSuggestion> = pool
        .into_iter()
        .take(TOP_N)
        .map(|v| VendorSuggestion {
            name: v.name.to_string(),
            category: v.category.to_string(),
            rating: v.rating,
            price_range: v.price_range.to_string(),
        })
        .collect();

    Some(RecommendationContent {
        title: "Recommended vendors".to_string(),
        description: format!(
            "Highly rated vendors for {} events, ordered by rating.",
            event_type.as_str()
        ),
        confidence: CONFIDENCE,
        details: RecommendationDetails::Vendor(suggestions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(rec: &RecommendationContent) -> &[VendorSuggestion] {
        match &rec.details {
            RecommendationDetails::Vendor(v) => v,
            other => panic!("expected vendor details, got {other:?}"),
        }
    }

    #[test]
    fn test_returns_top_three_by_rating() {
        let rec = build_vendor_recommendation(EventType::Wedding, &[]).unwrap();
        let v = suggestions(&rec);
        assert_eq!(v.len(), 3);
        assert!(v[0].rating >= v[1].rating && v[1].rating >= v[2].rating);
        assert_eq!(v[0].name, "Everlight Photography");
    }

    #[test]
    fn test_preferred_categories_filter_applies_when_overlapping() {
        let prefs = vec!["catering".to_string()];
        let rec = build_vendor_recommendation(EventType::Wedding, &prefs).unwrap();
        let v = suggestions(&rec);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].category, "catering");
    }

    #[test]
    fn test_non_overlapping_preferences_fall_back_to_full_list() {
        let prefs = vec!["fireworks".to_string()];
        let rec = build_vendor_recommendation(EventType::Birthday, &prefs).unwrap();
        assert_eq!(suggestions(&rec).len(), 3);
    }

    #[test]
    fn test_preference_match_is_case_insensitive() {
        let prefs = vec!["Entertainment".to_string()];
        let rec = build_vendor_recommendation(EventType::Conference, &prefs).unwrap();
        let v = suggestions(&rec);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].name, "ClearSignal AV");
    }

    #[test]
    fn test_unknown_event_type_has_no_vendor_table() {
        assert!(build_vendor_recommendation(EventType::Other, &[]).is_none());
    }

    #[test]
    fn test_confidence_is_static() {
        let rec = build_vendor_recommendation(EventType::Corporate, &[]).unwrap();
        assert_eq!(rec.confidence, 80);
    }
}
