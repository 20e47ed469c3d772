//! ConversationSession struct, lifecycle, and state accessors.

use std::sync::OnceLock;

use tracing::{debug, info, warn};

use crate::persona::{build_catalog, Persona};
use crate::LlmClient;

use super::types::Exchange;

/// Per-user chat state.
///
/// Created with [`ConversationSession::new`], reset with
/// [`ConversationSession::start_new_chat`], destroyed on drop.
pub struct ConversationSession {
    /// Upstream client. `None` means no binding was configured.
    pub(super) client: Option<Box<dyn LlmClient>>,
    /// Configured personas appended after the built-in presets.
    pub(super) custom_personas: Vec<Persona>,
    /// Memoized catalog, built on first access.
    pub(super) catalog: OnceLock<Vec<Persona>>,
    pub(super) system_role: String,
    pub(super) role_locked: bool,
    pub(super) last_question: String,
    pub(super) last_answer: String,
    pub(super) transcript: Vec<Exchange>,
    pub(super) last_request_payload: String,
    pub(super) last_response_payload: String,
    pub(super) debug_enabled: bool,
}

impl ConversationSession {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self::fresh(Some(client), Vec::new())
    }

    /// A session with no upstream binding. Every submission fails upstream.
    pub fn unbound() -> Self {
        Self::fresh(None, Vec::new())
    }

    fn fresh(client: Option<Box<dyn LlmClient>>, custom_personas: Vec<Persona>) -> Self {
        debug!(bound = client.is_some(), "conversation session created");
        Self {
            client,
            custom_personas,
            catalog: OnceLock::new(),
            system_role: String::new(),
            role_locked: false,
            last_question: String::new(),
            last_answer: String::new(),
            transcript: Vec::new(),
            last_request_payload: String::new(),
            last_response_payload: String::new(),
            debug_enabled: false,
        }
    }

    pub fn with_personas(mut self, personas: Vec<Persona>) -> Self {
        self.custom_personas = personas;
        self.catalog = OnceLock::new();
        self
    }

    pub fn with_system_role(mut self, role: impl Into<String>) -> Self {
        self.system_role = role.into();
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Discard all conversation state and return a fresh session.
    ///
    /// The client binding and configured personas carry over; everything
    /// else returns to its initial value.
    pub fn start_new_chat(mut self) -> Self {
        info!(exchanges = self.transcript.len(), "starting new chat");
        let client = self.client.take();
        let personas = std::mem::take(&mut self.custom_personas);
        Self::fresh(client, personas)
    }

    /// Persona catalog: built-in presets, then configured extras.
    pub fn available_roles(&self) -> &[Persona] {
        self.catalog.get_or_init(|| build_catalog(&self.custom_personas))
    }

    /// Replace the system role. Accepted even when locked.
    pub fn set_system_role(&mut self, role: impl Into<String>) {
        if self.role_locked {
            warn!("system role changed while locked");
        }
        self.system_role = role.into();
    }

    /// Use the catalog entry at `index` as the system role.
    pub fn select_role(&mut self, index: usize) -> Option<&Persona> {
        let instructions = self.available_roles().get(index)?.instructions.clone();
        self.set_system_role(instructions);
        self.available_roles().get(index)
    }

    pub fn lock_role(&mut self) {
        if !self.role_locked {
            debug!("system role locked");
            self.role_locked = true;
        }
    }

    pub fn toggle_debug(&mut self) {
        self.debug_enabled = !self.debug_enabled;
        info!(enabled = self.debug_enabled, "debug mode toggled");
    }

    pub fn system_role(&self) -> &str {
        &self.system_role
    }

    pub fn role_locked(&self) -> bool {
        self.role_locked
    }

    pub fn last_question(&self) -> &str {
        &self.last_question
    }

    pub fn last_answer(&self) -> &str {
        &self.last_answer
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    pub fn last_request_payload(&self) -> &str {
        &self.last_request_payload
    }

    pub fn last_response_payload(&self) -> &str {
        &self.last_response_payload
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn is_bound(&self) -> bool {
        self.client.is_some()
    }

    /// The transcript as display text, formatted on every call.
    pub fn render_transcript(&self) -> String {
        self.transcript.iter().map(|e| e.to_string()).collect()
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::unbound()
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        debug!(exchanges = self.transcript.len(), "conversation session closed");
    }
}
