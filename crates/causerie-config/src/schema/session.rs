//! Initial conversation session settings.

use serde::{Deserialize, Serialize};

/// Values a freshly started session begins with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Log every outgoing question.
    pub debug: bool,
    /// Initial system role text. Empty means the built-in default persona.
    pub role: String,
}
