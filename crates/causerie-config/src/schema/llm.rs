//! LLM client configuration types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Settings for the upstream Gemini client.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-120 seconds.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-600 seconds.
    pub request_timeout_secs: u32,
    /// Explicit key. When unset, `GEMINI_API_KEY` / `GOOGLE_API_KEY` are used.
    pub api_key: Option<String>,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            api_key: None,
        }
    }
}
