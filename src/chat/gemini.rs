//! Minimal client for the Generative Language `generateContent` endpoint:
//! one user turn in, the first candidate's text out.

use gloo_net::http::Request;
use log::info;
use serde::{Deserialize, Serialize};

use super::error::ChatError;
use crate::config;

/// Shown when a successful response carries no text.
pub const NO_ANSWER: &str = "No answer available.";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn user_turn(text: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// First candidate's first part, if it has non-empty text.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

/// Turns a raw HTTP status and body into the reply text.
pub fn read_reply(status: u16, body: &str) -> Result<String, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Http {
            status,
            body: body.to_string(),
        });
    }
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    Ok(response.first_text().unwrap_or(NO_ANSWER).to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    base: String,
    model: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(config::get_gemini_api_base(), config::GEMINI_MODEL)
    }
}

impl GeminiClient {
    pub fn new(base: &str, model: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base,
            self.model,
            urlencoding::encode(api_key)
        )
    }

    /// Sends `text` as a single user turn. Fails with
    /// [`ChatError::MissingCredential`] without touching the network when
    /// `api_key` is `None`.
    pub async fn complete(&self, api_key: Option<String>, text: &str) -> Result<String, ChatError> {
        let api_key = api_key.ok_or(ChatError::MissingCredential)?;

        info!("Requesting completion from {}", self.model);
        let response = Request::post(&self.endpoint(&api_key))
            .header("Content-Type", "application/json")
            .json(&GenerateContentRequest::user_turn(text))
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        read_reply(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_the_text_as_the_only_user_turn() {
        let body = serde_json::to_value(GenerateContentRequest::user_turn("Hi")).unwrap();
        assert_eq!(
            body,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "Hi" }] }] })
        );
    }

    #[test]
    fn endpoint_embeds_model_and_encoded_key() {
        let client = GeminiClient::new("https://example.test/", "gemini-1.5-flash");
        assert_eq!(
            client.endpoint("abc&d=1"),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=abc%26d%3D1"
        );
    }

    #[test]
    fn default_client_targets_the_configured_model() {
        let url = GeminiClient::default().endpoint("k");
        assert!(url.contains("/v1beta/models/gemini-1.5-flash:generateContent?key=k"));
    }

    #[test]
    fn reads_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#;
        assert_eq!(read_reply(200, body).unwrap(), "Hello");
    }

    #[test]
    fn ignores_later_candidates_and_parts() {
        let body = r#"{"candidates":[
            {"content":{"role":"model","parts":[{"text":"first"},{"text":"second"}]}},
            {"content":{"parts":[{"text":"other"}]}}
        ]}"#;
        assert_eq!(read_reply(200, body).unwrap(), "first");
    }

    #[test]
    fn falls_back_when_no_text() {
        for body in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        ] {
            assert_eq!(read_reply(200, body).unwrap(), NO_ANSWER, "body: {}", body);
        }
    }

    #[test]
    fn non_success_status_keeps_raw_body() {
        let err = read_reply(500, "server error").unwrap_err();
        assert_eq!(
            err,
            ChatError::Http {
                status: 500,
                body: "server error".to_string()
            }
        );
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        assert!(matches!(read_reply(200, "<html>"), Err(ChatError::Decode(_))));
    }
}
