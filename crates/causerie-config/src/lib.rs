//! Causerie configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use causerie_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CauserieConfig, LlmConfig, LogLevel, LoggingConfig, PersonaConfig, SessionConfig,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use causerie_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// if none exists. Out-of-range values are logged and kept; call
/// [`validation::validate`] for a strict check.
pub fn load_config() -> Result<CauserieConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path. A missing file is an error; invalid
/// values are logged and kept as parsed.
pub fn load_config_from(path: &Path) -> Result<CauserieConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string with the API key masked.
pub fn config_to_json(config: &CauserieConfig) -> String {
    let mut masked = config.clone();
    if masked.llm.api_key.is_some() {
        masked.llm.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&masked)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = CauserieConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"llm\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"personas\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini-2.0-flash\""));
    }

    #[test]
    fn config_to_json_masks_api_key() {
        let mut config = CauserieConfig::default();
        config.llm.api_key = Some("AIza-very-secret".into());
        let json = config_to_json(&config);
        assert!(!json.contains("AIza-very-secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_keeps_key_and_personas_despite_invalid_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[llm]
api_key = "AIza-real"
temperature = 2.5

[session]
role = "Be brief."

[[personas]]
label = "Pirate"
instructions = "Talk like a pirate."
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("AIza-real"));
        assert!((config.llm.temperature - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.session.role, "Be brief.");
        assert_eq!(config.personas.len(), 1);
        assert_eq!(config.personas[0].label, "Pirate");

        // The strict check still reports the bad value.
        let err = validation::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = CauserieConfig::default();
        let json = config_to_json(&config);
        let parsed: CauserieConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.llm.model, "gemini-2.0-flash");
        assert_eq!(parsed.llm.max_tokens, 4096);
    }
}
