use crate::errors::{GuardError, GuardErrorKind};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a guard failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardReport {
    /// Whether the argument was absent or invalid.
    pub kind: GuardErrorKind,
    /// Name of the failing parameter.
    pub param_name: String,
    /// Name of the absent property, for property failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Human-readable message, identical to the error's `Display` output.
    pub message: String,
}

impl From<&GuardError> for GuardReport {
    fn from(err: &GuardError) -> Self {
        Self {
            kind: err.kind(),
            param_name: err.param_name().to_owned(),
            property_name: err.property_name().map(str::to_owned),
            message: err.to_string(),
        }
    }
}

impl From<GuardError> for GuardReport {
    fn from(err: GuardError) -> Self {
        Self::from(&err)
    }
}
