use serde::{Deserialize, Serialize};

/// Outcome of per-drug safety rule evaluation.
///
/// The message is always non-empty: either the matched rule's warning or a
/// confirmation that no issues were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningResult {
    pub has_warning: bool,
    pub message: String,
}

impl WarningResult {
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            has_warning: true,
            message: message.into(),
        }
    }

    pub fn clear(message: impl Into<String>) -> Self {
        Self {
            has_warning: false,
            message: message.into(),
        }
    }
}
