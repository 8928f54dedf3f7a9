//! Per-entry sentiment scoring: blends the numeric rating with keyword
//! polarity from the comment text.

/// Positive polarity dictionary. Matching is case-insensitive substring.
pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "amazing",
    "excellent",
    "wonderful",
    "fantastic",
    "perfect",
    "beautiful",
    "delicious",
    "friendly",
    "helpful",
    "lovely",
    "loved",
    "enjoyed",
    "best",
    "smooth",
];

/// Negative polarity dictionary.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "poor",
    "disappointing",
    "rude",
    "slow",
    "worst",
    "horrible",
    "mediocre",
    "messy",
    "late",
    "cold",
    "bland",
    "chaotic",
];

const RATING_WEIGHT: f64 = 0.7;
const TEXT_WEIGHT: f64 = 0.3;

/// Sentiment label thresholds: > 0.6 positive, < 0.4 negative, else neutral.
/// Every score falls in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

pub fn label_for(score: f64) -> SentimentLabel {
    if score > 0.6 {
        SentimentLabel::Positive
    } else if score < 0.4 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Text polarity from dictionary hits: pos/(pos+neg), or 0.5 when the
/// comment hits neither dictionary.
fn text_score(comment: &str) -> f64 {
    let lower = comment.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive + negative == 0 {
        0.5
    } else {
        positive as f64 / (positive + negative) as f64
    }
}

/// Combined 0–1 sentiment score for one feedback entry.
/// Without a comment the rating alone decides; with one, the blend is
/// 0.7 × rating + 0.3 × text polarity.
pub fn sentiment_score(rating: i32, comment: Option<&str>) -> f64 {
    let rating_score = rating as f64 / 5.0;
    match comment.map(str::trim).filter(|c| !c.is_empty()) {
        None => rating_score,
        Some(text) => RATING_WEIGHT * rating_score + TEXT_WEIGHT * text_score(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_example_positive_entry() {
        // rating 5, "great venue": 0.7*1.0 + 0.3*1.0 = 1.0
        let score = sentiment_score(5, Some("great venue"));
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
        assert_eq!(label_for(score), SentimentLabel::Positive);
    }

    #[test]
    fn test_spec_example_negative_entry() {
        // rating 1, "bad service": 0.7*0.2 + 0.3*0.0 = 0.14
        let score = sentiment_score(1, Some("bad service"));
        assert!((score - 0.14).abs() < 1e-9, "score was {score}");
        assert_eq!(label_for(score), SentimentLabel::Negative);
    }

    #[test]
    fn test_missing_comment_uses_rating_alone() {
        assert!((sentiment_score(4, None) - 0.8).abs() < 1e-9);
        assert!((sentiment_score(3, Some("   ")) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_comment_without_dictionary_hits_is_neutral_text() {
        // 0.7*0.6 + 0.3*0.5 = 0.57
        let score = sentiment_score(3, Some("the event happened on a tuesday"));
        assert!((score - 0.57).abs() < 1e-9, "score was {score}");
        assert_eq!(label_for(score), SentimentLabel::Neutral);
    }

    #[test]
    fn test_mixed_polarity_comment() {
        // one positive + one negative hit: text = 0.5
        let score = sentiment_score(3, Some("great food but rude staff"));
        assert!((score - (0.7 * 0.6 + 0.3 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let score = sentiment_score(5, Some("AMAZING night, everything was Perfect!"));
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(label_for(0.6), SentimentLabel::Neutral);
        assert_eq!(label_for(0.61), SentimentLabel::Positive);
        assert_eq!(label_for(0.4), SentimentLabel::Neutral);
        assert_eq!(label_for(0.39), SentimentLabel::Negative);
    }
}
