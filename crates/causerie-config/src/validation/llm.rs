//! Validation for the `[llm]` section.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::schema::CauserieConfig;

/// Push an error if `value` is outside `range`. NaN is always out of range.
fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

pub(crate) fn validate_llm(errors: &mut Vec<String>, config: &CauserieConfig) {
    let llm = &config.llm;

    if llm.model.trim().is_empty() {
        errors.push("llm.model must not be empty".into());
    }
    check_range(errors, "llm.max_tokens", llm.max_tokens, 1..=65536);
    check_range(errors, "llm.temperature", llm.temperature, 0.0..=2.0);
    check_range(
        errors,
        "llm.connect_timeout_secs",
        llm.connect_timeout_secs,
        1..=120,
    );
    check_range(
        errors,
        "llm.request_timeout_secs",
        llm.request_timeout_secs,
        1..=600,
    );
    if llm.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
        errors.push("llm.api_key is set but empty".into());
    }
}
