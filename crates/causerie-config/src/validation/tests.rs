//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn persona(label: &str, instructions: &str) -> PersonaConfig {
    PersonaConfig {
        label: label.into(),
        instructions: instructions.into(),
    }
}

#[test]
fn default_config_validates() {
    let config = CauserieConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = CauserieConfig::default();
    config.llm.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.model"));
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = CauserieConfig::default();
    config.llm.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.max_tokens"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = CauserieConfig::default();
    config.llm.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.temperature"));

    config.llm.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = CauserieConfig::default();
    config.llm.temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.temperature"));
}

#[test]
fn catches_timeouts_out_of_range() {
    let mut config = CauserieConfig::default();
    config.llm.connect_timeout_secs = 0;
    config.llm.request_timeout_secs = 601;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.connect_timeout_secs"));
    assert!(err.contains("llm.request_timeout_secs"));
}

#[test]
fn catches_blank_api_key() {
    let mut config = CauserieConfig::default();
    config.llm.api_key = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.api_key"));
}

#[test]
fn accepts_well_formed_personas() {
    let mut config = CauserieConfig::default();
    config.personas = vec![
        persona("Pirate", "Answer like a pirate."),
        persona("Haiku", "Answer in a haiku."),
    ];
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_persona_fields() {
    let mut config = CauserieConfig::default();
    config.personas = vec![persona("", "text"), persona("Label", "   ")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("personas[0].label"));
    assert!(err.contains("personas[1].instructions"));
}

#[test]
fn catches_duplicate_persona_labels() {
    let mut config = CauserieConfig::default();
    config.personas = vec![persona("Pirate", "a"), persona("pirate", "b")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicated"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = CauserieConfig::default();
    config.llm.max_tokens = 0;
    config.llm.temperature = 9.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.max_tokens"));
    assert!(err.contains("llm.temperature"));
    assert!(err.contains("; "));
}
