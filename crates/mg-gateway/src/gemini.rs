//! Google Gemini `generateContent` client.

use std::time::Instant;

use async_trait::async_trait;
use mg_config::GeminiConfig;
use mg_core::{AnalysisResponse, AssessmentRequest};
use serde::{Deserialize, Serialize};

use crate::AnalysisGateway;
use crate::decode::decode_report;
use crate::error::GatewayError;
use crate::http::check_response;
use crate::prompt::build_prompt;
use crate::schema::response_schema;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentRequest {
    fn new(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated part text of the first candidate.
    fn into_text(self) -> Result<String, GatewayError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(GatewayError::EmptyReply {
                reason: block_reason,
            });
        };
        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyReply {
                reason: candidate.finish_reason.or(block_reason),
            });
        }
        Ok(text)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// [`AnalysisGateway`] backed by the Gemini REST API.
///
/// One `POST` per [`analyze`](AnalysisGateway::analyze) call. No retry, no
/// cache.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Build a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// [`GatewayError::NotConfigured`] without an API key,
    /// [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GatewayError> {
        if !config.is_configured() {
            return Err(GatewayError::NotConfigured);
        }
        let mut builder = reqwest::Client::builder().user_agent("mindguard/0.1");
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            base_url: config.base_url().to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one prompt and return the reply text.
    async fn generate(&self, prompt: String) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::new(prompt);
        let resp = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::from_transport(e, self.timeout_secs))?;
        let resp = check_response(resp).await?;

        let raw = resp
            .text()
            .await
            .map_err(|e| GatewayError::from_transport(e, self.timeout_secs))?;
        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GatewayError::Parse(e.to_string()))?;
        envelope.into_text()
    }
}

#[async_trait]
impl AnalysisGateway for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(
        &self,
        request: &AssessmentRequest,
    ) -> Result<AnalysisResponse, GatewayError> {
        let today = chrono::Local::now().date_naive();
        let prompt = build_prompt(request, today);
        let started = Instant::now();

        let result = match self.generate(prompt).await {
            Ok(text) => decode_report(&text),
            Err(e) => Err(e),
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(report) => tracing::info!(
                model = %self.model,
                elapsed_ms,
                level = %report.stress_analysis.stress_level,
                "analysis complete"
            ),
            Err(e) => tracing::warn!(
                model = %self.model,
                elapsed_ms,
                transient = e.is_transient(),
                error = %e,
                "analysis failed"
            ),
        }
        result
    }
}
