use serde::{Deserialize, Serialize};

use crate::validation::FieldViolation;

/// Body of every non-2xx response: a human-readable message, plus the
/// field-level violations when input validation failed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            violations: None,
        }
    }

    pub fn with_violations(message: &str, violations: Vec<FieldViolation>) -> Self {
        Self {
            message: message.to_string(),
            violations: Some(violations),
        }
    }
}
