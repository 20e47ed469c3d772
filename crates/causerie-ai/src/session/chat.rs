//! Async question submission for ConversationSession.

use tracing::{debug, info, warn};

use crate::persona::DEFAULT_SYSTEM_ROLE;
use crate::AiError;

use super::manager::ConversationSession;
use super::types::{Exchange, SessionError};

/// The role actually sent upstream: the session role, or the default when blank.
pub(crate) fn effective_role(system_role: &str) -> &str {
    if system_role.trim().is_empty() {
        DEFAULT_SYSTEM_ROLE
    } else {
        system_role
    }
}

impl ConversationSession {
    /// Send `question` upstream and record the exchange.
    ///
    /// Blank questions are rejected before any network call. On any failure
    /// the session state is exactly what it was before the call.
    pub async fn submit_question(&mut self, question: &str) -> Result<&str, SessionError> {
        if question.trim().is_empty() {
            debug!("rejecting blank question");
            return Err(SessionError::Validation("empty question".into()));
        }

        let client = self.client.as_mut().ok_or_else(|| {
            AiError::NotConfigured("no LLM client is bound to this session".into())
        })?;

        let role = effective_role(&self.system_role);
        client.set_system_role(role);

        if self.debug_enabled {
            info!(question, "sending question to LLM");
        }

        let interaction = client.send_question(question).await.map_err(|e| {
            warn!(error = %e, "LLM request failed");
            SessionError::Upstream(e)
        })?;

        self.last_answer = interaction.extracted_answer().to_string();
        self.last_request_payload = interaction.request_payload().to_string();
        self.last_response_payload = interaction.response_payload().to_string();
        self.last_question = question.to_string();
        self.transcript.push(Exchange::new(question, interaction.extracted_answer()));

        debug!(
            exchanges = self.transcript.len(),
            tokens = interaction.usage().total_tokens(),
            "exchange recorded"
        );

        Ok(self.last_answer.as_str())
    }
}
