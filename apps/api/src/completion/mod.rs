/// Completion client, the single point of entry for all external
/// chat-completion calls in Planora.
///
/// ARCHITECTURAL RULE: no other module may talk to the completion API
/// directly. All scoring delegation goes through this module so the
/// boundary can be swapped or mocked.
///
/// Wire shape is OpenAI-compatible: an ordered list of role-tagged
/// messages, a model identifier, and an optional strict-JSON flag.
/// Failures are NOT retried here; callers surface them for manual
/// re-invocation.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all completion calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Completion returned empty content")]
    EmptyContent,
}

/// A single role-tagged message in a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single completion client shared by all engines.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_url: String, api_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_url,
            api_key,
        })
    }

    /// Sends one completion request and returns the raw response text.
    /// A single attempt only: transport and API failures propagate to the
    /// caller, which aborts the whole batch it was scoring.
    pub async fn complete(
        &self,
        messages: &[Message],
        require_json: bool,
    ) -> Result<String, CompletionError> {
        let request_body = CompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages,
            response_format: require_json.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to extract the upstream error message
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(CompletionError::EmptyContent)?;

        debug!("Completion call succeeded ({} chars)", text.len());
        Ok(text)
    }

    /// Convenience method that requests strict JSON and deserializes the
    /// response text. The prompt must instruct the model on the schema.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        messages: &[Message],
    ) -> Result<T, CompletionError> {
        let text = self.complete(messages, true).await?;
        let text = strip_json_fences(&text);
        serde_json::from_str(text).map_err(CompletionError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from completion output.
/// Some providers wrap JSON in fences even when a JSON response was required.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
