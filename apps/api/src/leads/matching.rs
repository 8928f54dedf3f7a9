//! Lead matching: delegates vendor-to-event scoring to the external
//! completion service and persists the normalized matches.
//!
//! Failure policy: any transport or parse error aborts the whole batch
//! before anything is written, and propagates for manual retry. There is
//! no automatic retry or backoff.

use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::completion::{CompletionClient, Message};
use crate::errors::AppError;
use crate::leads::prompts::{LEAD_MATCH_PROMPT_TEMPLATE, LEAD_MATCH_SYSTEM};
use crate::models::event::EventRow;
use crate::models::lead::VendorLeadRow;

/// One scored match returned by the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadMatch {
    pub event_id: Uuid,
    pub match_score: i32,
    pub explanation: String,
    pub approach: String,
}

/// Expected completion response shape. An empty `matches` array is a
/// valid, non-error outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadMatchingResponse {
    pub matches: Vec<LeadMatch>,
}

/// Builds the scoring prompt from the vendor's services and the serialized
/// candidate events.
fn build_lead_prompt(services: &[String], candidates: &[EventRow]) -> Result<String, AppError> {
    let events_json = serde_json::to_string_pretty(
        &candidates
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "title": e.title,
                    "type": e.event_type,
                    "date": e.start_date,
                    "budget": e.budget,
                    "guest_count": e.estimated_guests,
                    "location": e.city,
                })
            })
            .collect::<Vec<_>>(),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize candidates: {e}")))?;

    Ok(LEAD_MATCH_PROMPT_TEMPLATE
        .replace("{services}", &services.join(", "))
        .replace("{events_json}", &events_json))
}

/// Clamps scores into 0–100 and drops matches that reference an event id
/// not present in the candidate set.
fn normalize_matches(matches: Vec<LeadMatch>, known_ids: &HashSet<Uuid>) -> Vec<LeadMatch> {
    matches
        .into_iter()
        .filter(|m| {
            let known = known_ids.contains(&m.event_id);
            if !known {
                warn!("Dropping match for unknown event id {}", m.event_id);
            }
            known
        })
        .map(|mut m| {
            m.match_score = m.match_score.clamp(0, 100);
            m
        })
        .collect()
}

/// Scores a vendor's services against all upcoming events and upserts the
/// resulting leads keyed on (vendor_id, event_id). Re-running overwrites
/// score, reason and approach but never the contact status.
pub async fn match_vendor_to_events(
    pool: &PgPool,
    completions: &CompletionClient,
    vendor_id: Uuid,
    services: &[String],
) -> Result<Vec<VendorLeadRow>, AppError> {
    let candidates: Vec<EventRow> =
        sqlx::query_as("SELECT * FROM events WHERE start_date >= $1 ORDER BY start_date ASC")
            .bind(Utc::now())
            .fetch_all(pool)
            .await?;

    if candidates.is_empty() {
        info!("No upcoming events to match vendor {vendor_id} against");
        return Ok(vec![]);
    }

    let prompt = build_lead_prompt(services, &candidates)?;
    let messages = [Message::system(LEAD_MATCH_SYSTEM), Message::user(prompt)];

    // One completion call scores the whole batch; its failure aborts
    // everything before any persistence.
    let response: LeadMatchingResponse = completions.complete_json(&messages).await?;

    let known_ids: HashSet<Uuid> = candidates.iter().map(|e| e.id).collect();
    let matches = normalize_matches(response.matches, &known_ids);

    let mut leads = Vec::with_capacity(matches.len());
    for m in &matches {
        let lead: VendorLeadRow = sqlx::query_as(
            r#"
            INSERT INTO vendor_leads
                (id, vendor_id, event_id, match_score, match_reason, suggested_approach,
                 status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'new', $7, $7)
            ON CONFLICT (vendor_id, event_id) DO UPDATE
                SET match_score = EXCLUDED.match_score,
                    match_reason = EXCLUDED.match_reason,
                    suggested_approach = EXCLUDED.suggested_approach,
                    updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vendor_id)
        .bind(m.event_id)
        .bind(m.match_score)
        .bind(&m.explanation)
        .bind(&m.approach)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        leads.push(lead);
    }

    info!(
        "Matched vendor {vendor_id} against {} events: {} leads",
        candidates.len(),
        leads.len()
    );

    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn make_event(title: &str, city: Option<&str>) -> EventRow {
        let now = Utc::now();
        EventRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            event_type: "wedding".to_string(),
            budget: 15_000.0,
            estimated_guests: 80,
            start_date: now + Duration::days(30),
            end_date: now + Duration::days(30),
            venue_name: None,
            city: city.map(|c| c.to_string()),
            created_at: now,
        }
    }

    #[test]
    fn test_prompt_embeds_services_and_candidate_fields() {
        let services = vec!["catering".to_string(), "decor".to_string()];
        let event = make_event("Riverside Wedding", Some("Portland"));
        let prompt = build_lead_prompt(&services, &[event.clone()]).unwrap();

        assert!(prompt.contains("catering, decor"));
        assert!(prompt.contains("Riverside Wedding"));
        assert!(prompt.contains("Portland"));
        assert!(prompt.contains(&event.id.to_string()));
        assert!(!prompt.contains("{services}"));
        assert!(!prompt.contains("{events_json}"));
    }

    #[test]
    fn test_response_fixture_deserializes() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{
                "matches": [
                    {{
                        "event_id": "{id}",
                        "match_score": 87,
                        "explanation": "Strong catering fit for a large wedding",
                        "approach": "Lead with the tasting-menu package"
                    }}
                ]
            }}"#
        );
        let parsed: LeadMatchingResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.matches.len(), 1);
        assert_eq!(parsed.matches[0].event_id, id);
        assert_eq!(parsed.matches[0].match_score, 87);
    }

    #[test]
    fn test_empty_matches_is_valid() {
        let parsed: LeadMatchingResponse = serde_json::from_str(r#"{"matches": []}"#).unwrap();
        assert!(parsed.matches.is_empty());
    }

    #[test]
    fn test_normalize_clamps_out_of_range_scores() {
        let id = Uuid::new_v4();
        let known: HashSet<Uuid> = [id].into_iter().collect();
        let matches = vec![
            LeadMatch {
                event_id: id,
                match_score: 140,
                explanation: String::new(),
                approach: String::new(),
            },
            LeadMatch {
                event_id: id,
                match_score: -5,
                explanation: String::new(),
                approach: String::new(),
            },
        ];
        let normalized = normalize_matches(matches, &known);
        assert_eq!(normalized[0].match_score, 100);
        assert_eq!(normalized[1].match_score, 0);
    }

    #[test]
    fn test_normalize_drops_unknown_event_ids() {
        let known: HashSet<Uuid> = [Uuid::new_v4()].into_iter().collect();
        let matches = vec![LeadMatch {
            event_id: Uuid::new_v4(),
            match_score: 50,
            explanation: String::new(),
            approach: String::new(),
        }];
        assert!(normalize_matches(matches, &known).is_empty());
    }
}
