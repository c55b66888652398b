//! Client for the generative feedback API.
//!
//! One network call per invocation, no retries. Every failure mode is
//! absorbed into a fallback tier of [`EssayFeedback`]; `analyze_essay`
//! cannot fail. Without an API key the client runs in demo mode and never
//! touches the network.

use crate::feedback::EssayFeedback;
use common::AppConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration slice for the feedback client, carved out of
/// [`AppConfig`] so tests can point the endpoint at a local server.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl From<&AppConfig> for AiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            endpoint: config.ai_endpoint.clone(),
        }
    }
}

/// Request body for the generative API.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response from the generative API.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: String,
}

#[derive(Debug, Error)]
enum CallError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error decoding response body: {0}. Full response: {1}")]
    Decode(serde_json::Error, String),
}

pub struct FeedbackClient {
    config: AiConfig,
    http: reqwest::Client,
}

impl FeedbackClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(AiConfig::from(config))
    }

    /// Analyzes an essay and always returns usable feedback.
    ///
    /// Ladder, in priority order: no key configured → fixed mock; call
    /// succeeded and parsed → verbatim model output; call succeeded but
    /// text unusable → fallback scores with the raw text as summary; call
    /// failed → fallback scores with the error as summary.
    pub async fn analyze_essay(&self, essay_content: &str) -> EssayFeedback {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("no API key configured, returning mock feedback");
            return EssayFeedback::mock();
        };

        let feedback = match self.call_model(api_key, essay_content).await {
            Ok(Some(text)) => EssayFeedback::from_response_text(&text),
            Ok(None) => EssayFeedback::from_empty_response(),
            Err(e) => {
                warn!(error = %e, "generative API call failed");
                EssayFeedback::from_error(e)
            }
        };

        debug!(tier = ?feedback.tier, "essay analysis finished");
        feedback
    }

    /// Performs the single API call and extracts the first candidate's
    /// text, if any.
    async fn call_model(
        &self,
        api_key: &str,
        essay_content: &str,
    ) -> Result<Option<String>, CallError> {
        let prompt = build_prompt(essay_content);

        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, api_key
        );

        let response = self.http.post(&url).json(&request_body).send().await?;
        let response_text = response.text().await?;
        let response = serde_json::from_str::<GenerateResponse>(&response_text)
            .map_err(|e| CallError::Decode(e, response_text))?;

        Ok(first_candidate_text(&response))
    }
}

/// Text of the first candidate's first part. An empty string counts as no
/// text, same as a missing candidate.
fn first_candidate_text(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .filter(|text| !text.is_empty())
}

fn build_prompt(essay_content: &str) -> String {
    format!(
        r#"You are an expert essay reviewer. Analyze the provided essay and return a JSON response with the following structure:
{{
    "grammar_score": <number between 0-10>,
    "clarity_score": <number between 0-10>,
    "argument_score": <number between 0-10>,
    "ai_summary": "<string with constructive feedback>"
}}

Essay to review:
{essay_content}

Please provide only the JSON response, no additional text."#
    )
}
