//! Configuration schema types for Causerie.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the chat front end uses
//! when no config file exists.

mod llm;
mod persona;
mod session;
mod system;

pub use llm::*;
pub use persona::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Causerie.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CauserieConfig {
    pub llm: LlmConfig,
    pub session: SessionConfig,
    pub personas: Vec<PersonaConfig>,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_llm() {
        let config = CauserieConfig::default();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.max_tokens, 4096);
        assert!((config.llm.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.llm.connect_timeout_secs, 10);
        assert_eq!(config.llm.request_timeout_secs, 120);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn default_config_has_correct_session() {
        let config = CauserieConfig::default();
        assert!(!config.session.debug);
        assert!(config.session.role.is_empty());
    }

    #[test]
    fn default_config_has_no_custom_personas() {
        let config = CauserieConfig::default();
        assert!(config.personas.is_empty());
    }

    #[test]
    fn default_config_logs_at_info() {
        let config = CauserieConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn personas_parse_from_array_of_tables() {
        let config: CauserieConfig = toml::from_str(
            r#"
[[personas]]
label = "Pirate"
instructions = "Answer like a pirate."

[[personas]]
label = "Haiku"
instructions = "Answer in a single haiku."
"#,
        )
        .unwrap();
        assert_eq!(config.personas.len(), 2);
        assert_eq!(config.personas[0].label, "Pirate");
        assert_eq!(config.personas[1].instructions, "Answer in a single haiku.");
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: CauserieConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
