//! Session value types and errors.

use std::fmt;

use causerie_common::Notification;

use crate::AiError;

/// One successful question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== User:")?;
        writeln!(f, "{}", self.question)?;
        writeln!(f, "== Server:")?;
        writeln!(f, "{}", self.answer)
    }
}

/// Failure of a single `submit_question` call. The session stays usable.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("upstream error: {0}")]
    Upstream(#[from] AiError),
}

impl SessionError {
    /// Displayable form for the presentation layer.
    pub fn to_notification(&self) -> Notification {
        match self {
            SessionError::Validation(_) => {
                Notification::error("Empty question", "The question text is missing")
            }
            SessionError::Upstream(cause) => Notification::error(
                "LLM API connection problem",
                format!("LLM API connection problem: {cause}"),
            ),
        }
    }
}

impl From<SessionError> for causerie_common::CauserieError {
    fn from(e: SessionError) -> Self {
        causerie_common::CauserieError::Session(e.to_string())
    }
}
