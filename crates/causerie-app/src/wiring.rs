//! Builds a ConversationSession from config and CLI arguments.

use std::time::Duration;

use causerie_ai::{AiError, ConversationSession, GeminiClient, GeminiConfig, Persona};
use causerie_config::{CauserieConfig, LlmConfig};
use tracing::{info, warn};

use crate::cli::Args;

/// Gemini settings from the `[llm]` section; the key falls back to the environment.
pub fn gemini_config(llm: &LlmConfig) -> Result<GeminiConfig, AiError> {
    let base = match llm.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        Some(key) => GeminiConfig::new(key),
        None => GeminiConfig::from_env()?,
    };

    Ok(base
        .with_model(&llm.model)
        .with_max_tokens(llm.max_tokens)
        .with_temperature(llm.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(llm.connect_timeout_secs)),
            Duration::from_secs(u64::from(llm.request_timeout_secs)),
        ))
}

/// Create the session. A missing key yields an unbound session so the
/// failure surfaces on the first question instead of at startup.
pub fn build_session(config: &CauserieConfig, args: &Args) -> ConversationSession {
    let session = match gemini_config(&config.llm).and_then(GeminiClient::new) {
        Ok(client) => {
            info!(model = %config.llm.model, "Gemini client ready");
            ConversationSession::new(Box::new(client))
        }
        Err(e) => {
            warn!("LLM client unavailable: {e}");
            ConversationSession::unbound()
        }
    };

    configure_session(session, config, args)
}

pub(crate) fn configure_session(
    session: ConversationSession,
    config: &CauserieConfig,
    args: &Args,
) -> ConversationSession {
    let personas = config
        .personas
        .iter()
        .map(|p| Persona::new(p.label.trim(), p.instructions.clone()))
        .collect();

    let mut session = session
        .with_personas(personas)
        .with_system_role(config.session.role.clone())
        .with_debug(config.session.debug || args.debug);

    if let Some(index) = args.role {
        match session.select_role(index) {
            Some(persona) => info!(label = %persona.label, "persona preselected"),
            None => warn!(index, "no persona at this index, keeping configured role"),
        }
    }

    session
}
