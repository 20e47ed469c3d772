//! Conversation engine for Causerie.
//!
//! Provides:
//! - The `LlmClient` seam a conversation talks to
//! - A Gemini `generateContent` client implementing it
//! - The built-in persona catalog
//! - `ConversationSession`, the per-user chat state holder

pub mod gemini;
pub mod persona;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use persona::{Persona, PersonaPreset, BUILT_IN_PERSONAS, DEFAULT_SYSTEM_ROLE};
pub use session::{ConversationSession, Exchange, SessionError};

/// An upstream model the session forwards questions to.
///
/// The role is configured first, then each question is sent on its own.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Configure the persona used for subsequent requests.
    fn set_system_role(&mut self, role: &str);

    /// Perform one request and return the parsed exchange.
    async fn send_question(&self, question: &str) -> Result<Interaction, AiError>;
}

/// One completed request/response pair as seen by the client.
#[derive(Debug, Clone)]
pub struct Interaction {
    answer: String,
    request_payload: String,
    response_payload: String,
    usage: TokenUsage,
}

impl Interaction {
    pub fn new(
        answer: impl Into<String>,
        request_payload: impl Into<String>,
        response_payload: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            request_payload: request_payload.into(),
            response_payload: response_payload.into(),
            usage: TokenUsage::default(),
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }

    /// The model's answer text, unwrapped from the response envelope.
    pub fn extracted_answer(&self) -> &str {
        &self.answer
    }

    /// The exact serialized request body.
    pub fn request_payload(&self) -> &str {
        &self.request_payload
    }

    /// The exact response body as received.
    pub fn response_payload(&self) -> &str {
        &self.response_payload
    }

    pub fn usage(&self) -> &TokenUsage {
        &self.usage
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl From<AiError> for causerie_common::CauserieError {
    fn from(e: AiError) -> Self {
        causerie_common::CauserieError::Ai(e.to_string())
    }
}
