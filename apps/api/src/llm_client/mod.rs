/// LLM Client — the single point of entry for all Gemini API calls in JobFit.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API
/// directly. All model interactions MUST go through this module.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls in JobFit.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The prompt was rejected by the upstream content-safety filter.
    #[error("blocked by content-safety filter: {reason}")]
    Blocked { reason: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Seam for the remote analysis call, so the flow controller can be tested
/// without network access.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Generates an analysis from a prompt, the resume text, and the job
    /// description. A content-safety rejection surfaces as `LlmError::Blocked`.
    async fn generate(
        &self,
        prompt: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by the whole service.
/// Wraps the Gemini `generateContent` endpoint. No retries: recovery is
/// user-initiated by repeating the action.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, LlmError> {
        // The original call shape: one user turn carrying three text parts.
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part { text: prompt },
                    Part { text: resume_text },
                    Part { text: job_description },
                ],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;

        if let Some(feedback) = &generated.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                let reason = feedback
                    .block_reason_message
                    .clone()
                    .unwrap_or_else(|| reason.clone());
                return Err(LlmError::Blocked { reason });
            }
        }

        if let Some(usage) = &generated.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text = generated
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_block_reason_deserializes() {
        let json = r#"{
            "promptFeedback": {
                "blockReason": "SAFETY",
                "blockReasonMessage": "Blocked for safety reasons"
            }
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let feedback = parsed.prompt_feedback.unwrap();
        assert_eq!(feedback.block_reason.as_deref(), Some("SAFETY"));
        assert_eq!(
            feedback.block_reason_message.as_deref(),
            Some("Blocked for safety reasons")
        );
    }

    #[test]
    fn test_response_text_parts_deserialize() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Strengths: "}, {"text": "clear impact."}]}}
            ],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 56}
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let text: String = parsed
            .candidates
            .unwrap()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap();
        assert_eq!(text, "Strengths: clear impact.");
    }

    #[test]
    fn test_api_error_body_deserializes() {
        let json = r#"{"error": {"message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: GeminiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }

    #[test]
    fn test_request_serializes_three_parts() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part { text: "prompt" },
                    Part { text: "resume" },
                    Part { text: "jd" },
                ],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][2]["text"], "jd");
    }
}
