//! Full configuration validation.
//!
//! Validates numeric ranges of the LLM section and the shape of custom
//! persona entries, collecting every problem into a single `ConfigError`.

mod llm;
mod personas;

#[cfg(test)]
mod tests;

use crate::schema::CauserieConfig;
use causerie_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CauserieConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    llm::validate_llm(&mut errors, config);
    personas::validate_personas(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
