// Prompt constants for vendor lead matching. The matcher fills the
// `{placeholders}` before sending.

/// System prompt: enforces JSON-only output for lead scoring.
pub const LEAD_MATCH_SYSTEM: &str =
    "You are an expert event-industry matchmaker scoring how well a vendor's \
    services fit upcoming events. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Lead matching prompt template.
/// Replace: `{services}`, `{events_json}`.
pub const LEAD_MATCH_PROMPT_TEMPLATE: &str = r#"Score how well a vendor offering the following service categories matches each upcoming event.

VENDOR SERVICE CATEGORIES:
{services}

UPCOMING EVENTS (candidates):
{events_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "matches": [
    {
      "event_id": "the-exact-event-id-uuid-from-the-candidates",
      "match_score": 87,
      "explanation": "Why this vendor fits this event",
      "approach": "How the vendor should pitch this event's organizer"
    }
  ]
}

Rules:
- match_score is an integer from 0 to 100.
- Only include events where the vendor's services are genuinely relevant; it is valid to return an empty matches array.
- event_id MUST be one of the candidate ids above.
- Consider event type, budget, guest count, date and location when scoring."#;
