//! Feedback result type and the degradation ladder.
//!
//! The client never fails: every outcome is an [`EssayFeedback`] carrying a
//! [`FeedbackTier`] that says which rung of the ladder produced it. Tests
//! and log lines read the tier instead of guessing from the summary text.

use serde::{Deserialize, Serialize};

/// Scores used whenever real model output is unavailable or unusable.
pub const FALLBACK_GRAMMAR_SCORE: f64 = 7.5;
pub const FALLBACK_CLARITY_SCORE: f64 = 8.0;
pub const FALLBACK_ARGUMENT_SCORE: f64 = 7.0;

/// Summary returned in demo mode (no API key configured).
pub const MOCK_SUMMARY: &str = "This essay shows good structure and clear arguments. \
     Consider improving grammar in some sections.";

/// Summary used when the model responded but carried no text at all.
pub const EMPTY_RESPONSE_SUMMARY: &str =
    "AI analysis completed but no detailed feedback available";

/// Maximum number of characters of raw model text kept as a summary.
const SUMMARY_TRUNCATE_CHARS: usize = 500;

/// Which rung of the fallback ladder produced a result, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    /// No API key configured; fixed demo output, no network call.
    Mock,
    /// Model output parsed cleanly into the four-field contract.
    Parsed,
    /// Model responded with text that was not usable JSON.
    TextFallback,
    /// The call itself failed (network, auth, quota, decode).
    ErrorFallback,
}

/// AI-generated feedback for one essay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EssayFeedback {
    pub grammar_score: f64,
    pub clarity_score: f64,
    pub argument_score: f64,
    pub ai_summary: String,
    pub tier: FeedbackTier,
}

/// The JSON contract the prompt asks the model to honor. All four fields
/// are required; a response missing any of them falls back to
/// [`FeedbackTier::TextFallback`].
#[derive(Deserialize)]
struct ParsedFeedback {
    grammar_score: f64,
    clarity_score: f64,
    argument_score: f64,
    ai_summary: String,
}

impl EssayFeedback {
    pub fn mock() -> Self {
        Self {
            grammar_score: FALLBACK_GRAMMAR_SCORE,
            clarity_score: FALLBACK_CLARITY_SCORE,
            argument_score: FALLBACK_ARGUMENT_SCORE,
            ai_summary: MOCK_SUMMARY.to_string(),
            tier: FeedbackTier::Mock,
        }
    }

    /// Interprets raw model text: parsed verbatim (unclamped) when it
    /// matches the contract, otherwise the fallback triple with the raw
    /// text truncated to 500 characters as the summary.
    pub fn from_response_text(text: &str) -> Self {
        let cleaned = strip_code_fence(text);
        match serde_json::from_str::<ParsedFeedback>(cleaned) {
            Ok(parsed) => Self {
                grammar_score: parsed.grammar_score,
                clarity_score: parsed.clarity_score,
                argument_score: parsed.argument_score,
                ai_summary: parsed.ai_summary,
                tier: FeedbackTier::Parsed,
            },
            Err(_) => Self {
                grammar_score: FALLBACK_GRAMMAR_SCORE,
                clarity_score: FALLBACK_CLARITY_SCORE,
                argument_score: FALLBACK_ARGUMENT_SCORE,
                ai_summary: text.chars().take(SUMMARY_TRUNCATE_CHARS).collect(),
                tier: FeedbackTier::TextFallback,
            },
        }
    }

    /// The model answered but with no text parts at all.
    pub fn from_empty_response() -> Self {
        Self {
            grammar_score: FALLBACK_GRAMMAR_SCORE,
            clarity_score: FALLBACK_CLARITY_SCORE,
            argument_score: FALLBACK_ARGUMENT_SCORE,
            ai_summary: EMPTY_RESPONSE_SUMMARY.to_string(),
            tier: FeedbackTier::TextFallback,
        }
    }

    /// The call itself failed; the summary carries the diagnostic.
    pub fn from_error(error: impl std::fmt::Display) -> Self {
        Self {
            grammar_score: FALLBACK_GRAMMAR_SCORE,
            clarity_score: FALLBACK_CLARITY_SCORE,
            argument_score: FALLBACK_ARGUMENT_SCORE,
            ai_summary: format!("AI analysis failed: {}", error),
            tier: FeedbackTier::ErrorFallback,
        }
    }
}

/// Strips one leading and one trailing triple-backtick fence, optionally
/// annotated `json`. Generative models routinely wrap their JSON this way
/// even when told not to.
fn strip_code_fence(text: &str) -> &str {
    let mut content = text.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_json_parses_verbatim() {
        let fb = EssayFeedback::from_response_text(
            r#"{"grammar_score": 8.5, "clarity_score": 9.0, "argument_score": 7.5, "ai_summary": "Solid work."}"#,
        );
        assert_eq!(fb.tier, FeedbackTier::Parsed);
        assert_eq!(fb.grammar_score, 8.5);
        assert_eq!(fb.ai_summary, "Solid work.");
    }

    #[test]
    fn out_of_range_scores_pass_through_unclamped() {
        let fb = EssayFeedback::from_response_text(
            r#"{"grammar_score": 12, "clarity_score": 5, "argument_score": 3, "ai_summary": "ok"}"#,
        );
        assert_eq!(fb.tier, FeedbackTier::Parsed);
        assert_eq!(fb.grammar_score, 12.0);
    }

    #[test]
    fn json_code_fence_is_stripped() {
        let fenced = "```json\n{\"grammar_score\": 6.0, \"clarity_score\": 7.0, \
                      \"argument_score\": 8.0, \"ai_summary\": \"Fenced.\"}\n```";
        let fb = EssayFeedback::from_response_text(fenced);
        assert_eq!(fb.tier, FeedbackTier::Parsed);
        assert_eq!(fb.ai_summary, "Fenced.");
    }

    #[test]
    fn bare_code_fence_is_stripped() {
        let fenced = "```\n{\"grammar_score\": 6.0, \"clarity_score\": 7.0, \
                      \"argument_score\": 8.0, \"ai_summary\": \"Fenced.\"}\n```";
        let fb = EssayFeedback::from_response_text(fenced);
        assert_eq!(fb.tier, FeedbackTier::Parsed);
    }

    #[test]
    fn non_json_text_falls_back_with_that_text_as_summary() {
        let fb = EssayFeedback::from_response_text("Not a valid response");
        assert_eq!(fb.tier, FeedbackTier::TextFallback);
        assert_eq!(fb.ai_summary, "Not a valid response");
        assert_eq!(fb.grammar_score, FALLBACK_GRAMMAR_SCORE);
        assert_eq!(fb.clarity_score, FALLBACK_CLARITY_SCORE);
        assert_eq!(fb.argument_score, FALLBACK_ARGUMENT_SCORE);
    }

    #[test]
    fn missing_required_field_falls_back() {
        let fb = EssayFeedback::from_response_text(
            r#"{"grammar_score": 8.0, "clarity_score": 9.0, "argument_score": 7.0}"#,
        );
        assert_eq!(fb.tier, FeedbackTier::TextFallback);
        assert!(fb.ai_summary.contains("grammar_score"));
    }

    #[test]
    fn long_raw_text_is_truncated_to_500_chars() {
        let long = "x".repeat(800);
        let fb = EssayFeedback::from_response_text(&long);
        assert_eq!(fb.tier, FeedbackTier::TextFallback);
        assert_eq!(fb.ai_summary.chars().count(), 500);
    }

    #[test]
    fn mock_feedback_uses_the_fixed_values() {
        let fb = EssayFeedback::mock();
        assert_eq!(fb.tier, FeedbackTier::Mock);
        assert_eq!(fb.grammar_score, 7.5);
        assert_eq!(fb.clarity_score, 8.0);
        assert_eq!(fb.argument_score, 7.0);
        assert!(fb.ai_summary.starts_with("This essay shows good structure"));
    }

    #[test]
    fn error_summary_embeds_the_diagnostic() {
        let fb = EssayFeedback::from_error("connection refused");
        assert_eq!(fb.tier, FeedbackTier::ErrorFallback);
        assert_eq!(fb.ai_summary, "AI analysis failed: connection refused");
    }
}
