//! Feedback analysis: rating averages, sentiment distribution, topic
//! ranking and derived improvement advice for one event.
//!
//! Analysis is a full recompute, not incremental: each run overwrites the
//! event's single analysis row, so re-running on an unchanged feedback set
//! yields identical output.

use chrono::Utc;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::sentiment::{label_for, sentiment_score, SentimentLabel};
use crate::feedback::topics::{extract_topics, TopicSummary};
use crate::models::feedback::{FeedbackAnalysisRow, FeedbackEntryRow};

/// Topics averaging below this sentiment produce improvement advice.
const WEAK_TOPIC_THRESHOLD: f64 = 0.5;
/// Overall mean sentiment below this triggers the general fallback advice.
const GENERAL_ADVICE_THRESHOLD: f64 = 0.7;

/// Fixed advice per topic, used when that topic scores poorly.
fn advice_for(topic: &str) -> &'static str {
    match topic {
        "Service" => "Review service quality with your vendors and set explicit response-time expectations.",
        "Food" => "Revisit the menu with your caterer and schedule a tasting before the next event.",
        "Venue" => "Reassess the venue choice: capacity, accessibility and comfort came up negatively.",
        "Staff" => "Brief staff more thoroughly and assign a single point of contact for guests.",
        "Music" => "Align the playlist and volume with the audience; collect song requests in advance.",
        "Decorations" => "Simplify the decor concept and confirm setup is complete before guests arrive.",
        "Organization" => "Build a minute-by-minute run sheet and confirm the schedule with every vendor.",
        _ => "Collect more detailed feedback to pinpoint what to improve.",
    }
}

/// Computed analysis for one event's feedback set.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAnalysis {
    pub average_rating: f64,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub topics: Vec<TopicSummary>,
    pub recommendations: Vec<String>,
}

/// Analyzes a non-empty feedback set. Returns `None` for an empty one;
/// the distribution is undefined without entries.
pub fn analyze(entries: &[FeedbackEntryRow]) -> Option<FeedbackAnalysis> {
    if entries.is_empty() {
        return None;
    }
    let total = entries.len() as f64;

    let average_rating = entries.iter().map(|e| e.rating as f64).sum::<f64>() / total;

    let scores: Vec<f64> = entries
        .iter()
        .map(|e| sentiment_score(e.rating, e.comment.as_deref()))
        .collect();

    // Each score lands in exactly one bucket, so the three counts always
    // partition the total.
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;
    for score in &scores {
        match label_for(*score) {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Neutral => neutral += 1,
            SentimentLabel::Negative => negative += 1,
        }
    }

    let scored_comments: Vec<(&str, f64)> = entries
        .iter()
        .zip(&scores)
        .filter_map(|(e, score)| e.comment.as_deref().map(|c| (c, *score)))
        .collect();
    let topics = extract_topics(&scored_comments);

    let recommendations = derive_recommendations(&topics, &scores);

    Some(FeedbackAnalysis {
        average_rating,
        positive_pct: positive as f64 / total * 100.0,
        neutral_pct: neutral as f64 / total * 100.0,
        negative_pct: negative as f64 / total * 100.0,
        topics,
        recommendations,
    })
}

/// Advice from the weakest topics, worst first; a single general note when
/// no topic qualifies but sentiment is soft overall.
fn derive_recommendations(topics: &[TopicSummary], scores: &[f64]) -> Vec<String> {
    let mut weak: Vec<&TopicSummary> = topics
        .iter()
        .filter(|t| t.average_sentiment < WEAK_TOPIC_THRESHOLD)
        .collect();
    weak.sort_by(|a, b| {
        a.average_sentiment
            .partial_cmp(&b.average_sentiment)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if !weak.is_empty() {
        return weak.iter().map(|t| advice_for(&t.topic).to_string()).collect();
    }

    let overall = scores.iter().sum::<f64>() / scores.len() as f64;
    if overall < GENERAL_ADVICE_THRESHOLD {
        vec![
            "Overall sentiment is lukewarm. Survey guests with targeted questions to find what fell short."
                .to_string(),
        ]
    } else {
        vec![]
    }
}

/// Runs the analysis for an event and upserts its single analysis row.
pub async fn run_feedback_analysis(
    pool: &PgPool,
    event_id: Uuid,
) -> Result<FeedbackAnalysisRow, AppError> {
    let entries: Vec<FeedbackEntryRow> =
        sqlx::query_as("SELECT * FROM feedback_entries WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(pool)
            .await?;

    let analysis = analyze(&entries).ok_or_else(|| {
        AppError::Validation(format!("Event {event_id} has no feedback to analyze"))
    })?;

    let row: FeedbackAnalysisRow = sqlx::query_as(
        r#"
        INSERT INTO feedback_analyses
            (id, event_id, average_rating, positive_pct, neutral_pct, negative_pct,
             topics, recommendations, analyzed_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (event_id) DO UPDATE
            SET average_rating = EXCLUDED.average_rating,
                positive_pct = EXCLUDED.positive_pct,
                neutral_pct = EXCLUDED.neutral_pct,
                negative_pct = EXCLUDED.negative_pct,
                topics = EXCLUDED.topics,
                recommendations = EXCLUDED.recommendations,
                analyzed_at = EXCLUDED.analyzed_at
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(event_id)
    .bind(analysis.average_rating)
    .bind(analysis.positive_pct)
    .bind(analysis.neutral_pct)
    .bind(analysis.negative_pct)
    .bind(Json(&analysis.topics))
    .bind(Json(&analysis.recommendations))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    info!(
        "Analyzed {} feedback entries for event {event_id} (avg rating {:.2})",
        entries.len(),
        analysis.average_rating
    );

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_entry(rating: i32, comment: Option<&str>) -> FeedbackEntryRow {
        FeedbackEntryRow {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            rating,
            comment: comment.map(|c| c.to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_feedback_yields_none() {
        assert!(analyze(&[]).is_none());
    }

    #[test]
    fn test_spec_example_distribution() {
        // [{5, "great venue"}, {1, "bad service"}] → 50% positive, 0% neutral,
        // 50% negative.
        let entries = vec![
            make_entry(5, Some("great venue")),
            make_entry(1, Some("bad service")),
        ];
        let a = analyze(&entries).unwrap();
        assert!((a.positive_pct - 50.0).abs() < 1e-9);
        assert!((a.neutral_pct - 0.0).abs() < 1e-9);
        assert!((a.negative_pct - 50.0).abs() < 1e-9);
        assert!((a.average_rating - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_buckets_partition_total() {
        let entries = vec![
            make_entry(5, Some("amazing food")),
            make_entry(3, None),
            make_entry(2, Some("slow service")),
            make_entry(4, Some("nice")),
            make_entry(1, None),
        ];
        let a = analyze(&entries).unwrap();
        let sum = a.positive_pct + a.neutral_pct + a.negative_pct;
        assert!((sum - 100.0).abs() < 1e-9, "percentages summed to {sum}");
    }

    #[test]
    fn test_analysis_is_deterministic_for_unchanged_input() {
        let entries = vec![
            make_entry(4, Some("lovely venue and friendly staff")),
            make_entry(2, Some("food was cold")),
        ];
        let first = analyze(&entries).unwrap();
        let second = analyze(&entries).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_weak_topics_drive_recommendations_worst_first() {
        // Service worse than Food; both below 0.5.
        let entries = vec![
            make_entry(1, Some("terrible service")),
            make_entry(2, Some("food was bland")),
        ];
        let a = analyze(&entries).unwrap();
        assert_eq!(a.recommendations.len(), 2);
        assert_eq!(a.recommendations[0], advice_for("Service"));
        assert_eq!(a.recommendations[1], advice_for("Food"));
    }

    #[test]
    fn test_general_fallback_when_no_weak_topic_but_soft_sentiment() {
        // No topic keywords at all; ratings of 3 give 0.6 scores < 0.7 overall.
        let entries = vec![make_entry(3, None), make_entry(3, None)];
        let a = analyze(&entries).unwrap();
        assert!(a.topics.is_empty());
        assert_eq!(a.recommendations.len(), 1);
        assert!(a.recommendations[0].contains("lukewarm"));
    }

    #[test]
    fn test_no_recommendations_when_everything_is_strong() {
        let entries = vec![
            make_entry(5, Some("amazing venue")),
            make_entry(5, Some("wonderful food")),
        ];
        let a = analyze(&entries).unwrap();
        assert!(a.recommendations.is_empty());
    }

    #[test]
    fn test_topics_ranked_by_mentions() {
        let entries = vec![
            make_entry(5, Some("great food")),
            make_entry(4, Some("the menu was excellent")),
            make_entry(5, Some("beautiful venue")),
        ];
        let a = analyze(&entries).unwrap();
        assert_eq!(a.topics[0].topic, "Food");
        assert_eq!(a.topics[0].mentions, 2);
    }
}
