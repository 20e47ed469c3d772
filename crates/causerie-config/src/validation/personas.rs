//! Validation for `[[personas]]` entries.

use std::collections::HashSet;

use crate::schema::CauserieConfig;

pub(crate) fn validate_personas(errors: &mut Vec<String>, config: &CauserieConfig) {
    let mut seen = HashSet::new();

    for (i, persona) in config.personas.iter().enumerate() {
        let label = persona.label.trim();
        if label.is_empty() {
            errors.push(format!("personas[{i}].label must not be empty"));
        } else if !seen.insert(label.to_lowercase()) {
            errors.push(format!("personas[{i}].label '{label}' is duplicated"));
        }
        if persona.instructions.trim().is_empty() {
            errors.push(format!("personas[{i}].instructions must not be empty"));
        }
    }
}
