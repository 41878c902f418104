//! AI Gateway: note summaries and tutoring chat over a hosted model.
//!
//! # Responsibility
//! - Build the two fixed prompt shapes (summary, tutor turn).
//! - Mask every model failure behind a fixed user-facing sentence.
//!
//! # Invariants
//! - Gateway calls never return errors; failures are logged and replaced
//!   by the fallback text.
//! - The gateway keeps no conversation state; callers pass history each turn.
//! - No retries.

use crate::logging::sanitize_message;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod gemini;

pub use gemini::GeminiClient;

const LOGGED_ERROR_CHARS: usize = 200;

pub const SUMMARY_PROMPT_PREFIX: &str =
    "Summarize the following educational note concisely in bullet points:\n\n";
pub const TUTOR_SYSTEM_INSTRUCTION: &str = "You are a helpful, encouraging, and knowledgeable academic tutor for a university student. Keep answers concise and educational.";

pub const SUMMARY_EMPTY_FALLBACK: &str = "Could not generate summary.";
pub const SUMMARY_ERROR_FALLBACK: &str = "Error contacting AI service. Please check your API Key.";
pub const CHAT_EMPTY_FALLBACK: &str = "I'm not sure how to answer that.";
pub const CHAT_ERROR_FALLBACK: &str = "Sorry, I am having trouble connecting to the knowledge base right now. Please check your Internet connection or API Key.";

/// Speaker of one conversation turn. Serialized as `user` / `model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// One generation call: ordered turns plus an optional system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub system_instruction: Option<String>,
    pub contents: Vec<ChatMessage>,
}

/// Failure talking to the hosted model. Never shown to users.
#[derive(Debug)]
pub enum GatewayError {
    /// No API credential configured.
    MissingApiKey,
    /// HTTP client construction or transport failure.
    Transport(reqwest::Error),
    /// Non-success HTTP status (auth, quota, bad request).
    Status { status: u16, body: String },
    /// Success response that is not a `generateContent` payload.
    Decode(serde_json::Error),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "no API key configured for the AI service"),
            Self::Transport(err) => write!(f, "AI service transport error: {err}"),
            Self::Status { status, body } => {
                write!(f, "AI service returned HTTP {status}: {body}")
            }
            Self::Decode(err) => write!(f, "AI service response could not be decoded: {err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::MissingApiKey | Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Text generation backend seam.
pub trait GenerativeModel {
    /// Returns the generated text (possibly empty).
    fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}

/// Summaries and tutor chat with failure masking.
pub struct AiGateway<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> AiGateway<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Summarizes `text` as bullet points, or returns a fixed fallback.
    pub fn summarize(&self, text: &str) -> String {
        let request = GenerationRequest {
            system_instruction: None,
            contents: vec![ChatMessage::user(format!("{SUMMARY_PROMPT_PREFIX}{text}"))],
        };
        self.complete(
            "ai_summarize",
            &request,
            SUMMARY_EMPTY_FALLBACK,
            SUMMARY_ERROR_FALLBACK,
        )
    }

    /// Sends `message` after replaying `history` under the tutor
    /// instruction, or returns a fixed fallback.
    pub fn chat_turn(&self, message: &str, history: &[ChatMessage]) -> String {
        let mut contents = history.to_vec();
        contents.push(ChatMessage::user(message));
        let request = GenerationRequest {
            system_instruction: Some(TUTOR_SYSTEM_INSTRUCTION.to_string()),
            contents,
        };
        self.complete(
            "ai_chat_turn",
            &request,
            CHAT_EMPTY_FALLBACK,
            CHAT_ERROR_FALLBACK,
        )
    }

    fn complete(
        &self,
        event: &str,
        request: &GenerationRequest,
        empty_fallback: &str,
        error_fallback: &str,
    ) -> String {
        match self.model.generate(request) {
            Ok(text) if text.trim().is_empty() => {
                warn!("event={event} module=ai status=empty turns={}", request.contents.len());
                empty_fallback.to_string()
            }
            Ok(text) => {
                info!(
                    "event={event} module=ai status=ok turns={} response_chars={}",
                    request.contents.len(),
                    text.chars().count()
                );
                text
            }
            Err(err) => {
                warn!(
                    "event={event} module=ai status=error error={}",
                    sanitize_message(&err.to_string(), LOGGED_ERROR_CHARS)
                );
                error_fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedModel {
        reply: Result<&'static str, u16>,
        seen: RefCell<Vec<GenerationRequest>>,
    }

    impl ScriptedModel {
        fn replying(reply: Result<&'static str, u16>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl GenerativeModel for ScriptedModel {
        fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
            self.seen.borrow_mut().push(request.clone());
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(GatewayError::Status {
                    status,
                    body: String::new(),
                }),
            }
        }
    }

    #[test]
    fn summarize_wraps_text_in_bullet_point_template() {
        let gateway = AiGateway::new(ScriptedModel::replying(Ok("- point")));
        assert_eq!(gateway.summarize("Ohm's law"), "- point");

        let seen = gateway.model().seen.borrow();
        assert_eq!(seen[0].system_instruction, None);
        assert_eq!(
            seen[0].contents,
            vec![ChatMessage::user(format!("{SUMMARY_PROMPT_PREFIX}Ohm's law"))]
        );
    }

    #[test]
    fn summarize_masks_failures_and_empty_output() {
        let failing = AiGateway::new(ScriptedModel::replying(Err(401)));
        assert_eq!(failing.summarize("x"), SUMMARY_ERROR_FALLBACK);

        let empty = AiGateway::new(ScriptedModel::replying(Ok("  ")));
        assert_eq!(empty.summarize("x"), SUMMARY_EMPTY_FALLBACK);
    }

    #[test]
    fn chat_turn_replays_history_then_message_under_tutor_instruction() {
        let gateway = AiGateway::new(ScriptedModel::replying(Ok("Sure.")));
        let history = vec![ChatMessage::user("hi"), ChatMessage::model("hello")];

        assert_eq!(gateway.chat_turn("explain FFT", &history), "Sure.");

        let seen = gateway.model().seen.borrow();
        assert_eq!(
            seen[0].system_instruction.as_deref(),
            Some(TUTOR_SYSTEM_INSTRUCTION)
        );
        assert_eq!(seen[0].contents.len(), 3);
        assert_eq!(seen[0].contents[2], ChatMessage::user("explain FFT"));
    }

    #[test]
    fn chat_turn_masks_failures_and_empty_output() {
        let failing = AiGateway::new(ScriptedModel::replying(Err(503)));
        assert_eq!(failing.chat_turn("q", &[]), CHAT_ERROR_FALLBACK);

        let empty = AiGateway::new(ScriptedModel::replying(Ok("")));
        assert_eq!(empty.chat_turn("q", &[]), CHAT_EMPTY_FALLBACK);
    }
}
