//! Gemini `generateContent` client.
//!
//! Gemini names the assistant role "model" and takes the system prompt as a
//! separate `systemInstruction` content block rather than a message.

use super::{ChatMessage, ChatRole, GatewayError, GenerationRequest, GenerativeModel};
use crate::config::GatewayConfig;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Blocking client for the hosted Gemini model.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;
        let body = GeminiRequest::from(request);

        debug!(
            "event=ai_request module=ai status=start model={} turns={}",
            self.model,
            body.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let raw = response.text()?;
        let parsed: GeminiResponse = serde_json::from_str(&raw).map_err(GatewayError::Decode)?;
        Ok(parsed.text())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

impl From<&GenerationRequest> for GeminiRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            contents: request.contents.iter().map(GeminiContent::from).collect(),
            system_instruction: request.system_instruction.as_ref().map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: text.clone() }],
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl From<&ChatMessage> for GeminiContent {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![GeminiPart {
                text: message.text.clone(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate; empty when absent.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_gemini_roles_and_system_instruction() {
        let request = GenerationRequest {
            system_instruction: Some("be brief".to_string()),
            contents: vec![ChatMessage::user("q"), ChatMessage::model("a")],
        };
        let body = serde_json::to_value(GeminiRequest::from(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "a");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be brief");
        assert!(body["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let parsed: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"- a"},{"text":"\n- b"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.text(), "- a\n- b");

        let empty: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn missing_api_key_fails_without_sending() {
        let client = GeminiClient::new(&GatewayConfig {
            api_key: Some("   ".to_string()),
            ..GatewayConfig::default()
        })
        .unwrap();
        assert_eq!(client.model_name(), "gemini-2.5-flash");
        let err = client
            .generate(&GenerationRequest::default())
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey));
    }
}
