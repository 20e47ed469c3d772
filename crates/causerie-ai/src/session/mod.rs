//! Conversation session management.
//!
//! A `ConversationSession` holds one user's chat state: the chosen system
//! role, the question/answer transcript and the raw payloads of the last
//! exchange. It forwards questions to an injected `LlmClient`.

mod chat;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{Exchange, SessionError};
