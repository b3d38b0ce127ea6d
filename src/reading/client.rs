//! Gemini `generateContent` client.
//!
//! One outbound call per reading, no internal retry — any failure surfaces
//! undecorated and the consuming flow resets the wizard. The HTTP plumbing
//! is kept behind the [`ReadingBackend`] trait so the flow driver and the
//! integration tests can run against a stub.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{prompts, schema, Reading};
use crate::wizard::answers::AnswerSet;

/// Ways a reading request can fail. All of them are terminal for the
/// attempt; retry is always user-initiated.
#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("reading request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model returned no text")]
    EmptyResponse,
    #[error("model returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can turn an Answer Set into a [`Reading`].
#[async_trait]
pub trait ReadingBackend: Send + Sync {
    async fn generate(&self, answers: &AnswerSet) -> Result<Reading, ReadingError>;
}

/// Production backend: Google Gemini with a structured-output schema.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// No request timeout here on purpose: the processing screen waits as
    /// long as the transport does. A hung call hangs the screen.
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// The full request body: system instruction, prompt with the serialized
    /// answers, and the fixed response schema.
    fn request_body(answers: &AnswerSet) -> Value {
        json!({
            "system_instruction": { "parts": [{ "text": prompts::system_instruction() }] },
            "contents": [{ "parts": [{ "text": prompts::reading_prompt(answers) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::response_schema(),
            },
        })
    }
}

#[async_trait]
impl ReadingBackend for GeminiClient {
    async fn generate(&self, answers: &AnswerSet) -> Result<Reading, ReadingError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "sending reading request");
        let resp = self
            .http
            .post(&url)
            .json(&Self::request_body(answers))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = resp.json().await?;
        let reading = parse_generate_response(&body)?;
        info!(mode = ?reading.mode, "reading received");
        Ok(reading)
    }
}

/// Extract the first candidate's text and parse it as a [`Reading`].
///
/// Pure so the parse path is testable without a network.
pub fn parse_generate_response(body: &Value) -> Result<Reading, ReadingError> {
    let text = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or(ReadingError::EmptyResponse)?;
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ReadingMode;
    use crate::wizard::answers::{AnswerSet, Category};

    fn wrap(text: &str) -> Value {
        json!({
            "candidates": [
                { "content": { "parts": [{ "text": text }] } }
            ]
        })
    }

    const MONEY_READING: &str = r#"{
        "mode": "money",
        "free": { "headline": "H", "one_liner": "O" },
        "money_result": {
            "risk_map_title": "T",
            "free_timeline": [
                { "window": "2026 H1", "theme": "X", "best_action": "do", "avoid": "dont" }
            ],
            "free_insight": "I",
            "locked": {
                "next_move_checklist": ["a"],
                "danger_zones": ["b"],
                "highest_roi_habit": "c"
            }
        },
        "paywall": {
            "price_anchor": "$10.99", "discount_price": "$5.00", "cta": "GO",
            "bullets": ["x"], "disclaimer": "d", "urgency": "u"
        },
        "share_card": { "title": "t", "subtitle": "s", "tagline": "g", "cta": "c" }
    }"#;

    #[test]
    fn parses_a_well_formed_money_reading() {
        let reading = parse_generate_response(&wrap(MONEY_READING)).unwrap();
        assert_eq!(reading.mode, ReadingMode::Money);
        assert!(reading.love_result.is_none());
        assert_eq!(
            reading.money_result.unwrap().locked.highest_roi_habit,
            "c"
        );
    }

    #[test]
    fn empty_text_is_an_empty_response() {
        let err = parse_generate_response(&wrap("")).unwrap_err();
        assert!(matches!(err, ReadingError::EmptyResponse));

        let err = parse_generate_response(&json!({ "candidates": [] })).unwrap_err();
        assert!(matches!(err, ReadingError::EmptyResponse));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_generate_response(&wrap("not json")).unwrap_err();
        assert!(matches!(err, ReadingError::Parse(_)));

        // Well-formed JSON missing required fields is still a parse failure.
        let err = parse_generate_response(&wrap(r#"{ "mode": "money" }"#)).unwrap_err();
        assert!(matches!(err, ReadingError::Parse(_)));
    }

    #[test]
    fn request_body_carries_schema_and_answers() {
        let mut answers = AnswerSet::new();
        answers.mode = Some(Category::Money);
        answers.occupation = "junior dev".to_string();

        let body = GeminiClient::request_body(&answers);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body["generationConfig"]["responseSchema"].is_object());
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("junior dev"));
    }
}
