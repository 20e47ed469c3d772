//! Custom persona entries appended to the built-in catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PersonaConfig {
    /// Short name shown in the role list.
    pub label: String,
    /// System instructions sent with every request.
    pub instructions: String,
}
