use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result returned by every guard.
pub type GuardResult<T> = Result<T, GuardError>;

/// Precondition failures raised by guards.
///
/// Messages are fixed English text. The failing parameter is always
/// available through [`GuardError::param_name`] without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The argument itself is absent.
    #[error("{param_name} is null.")]
    NullArgument {
        /// Name of the absent parameter.
        param_name: String,
    },
    /// A property of a present argument is absent.
    #[error("{param_name}.{property_name} is null.")]
    NullProperty {
        /// Name of the argument owning the property.
        param_name: String,
        /// Name of the absent property.
        property_name: String,
    },
    /// The argument is exactly the empty string.
    #[error("{param_name} is an empty string.")]
    EmptyString {
        /// Name of the offending parameter.
        param_name: String,
    },
    /// The argument is empty or consists only of white-space.
    #[error("{param_name} is an empty or white-space string.")]
    EmptyOrWhiteSpaceString {
        /// Name of the offending parameter.
        param_name: String,
    },
}

/// Coarse classification of a [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardErrorKind {
    /// A required argument is absent.
    NullArgument,
    /// The argument is present but otherwise invalid.
    InvalidArgument,
}

impl GuardError {
    pub(crate) fn null_argument(param_name: &str) -> Self {
        Self::NullArgument {
            param_name: param_name.to_owned(),
        }
    }

    pub(crate) fn null_property(param_name: &str, property_name: &str) -> Self {
        Self::NullProperty {
            param_name: param_name.to_owned(),
            property_name: property_name.to_owned(),
        }
    }

    pub(crate) fn empty_string(param_name: &str) -> Self {
        Self::EmptyString {
            param_name: param_name.to_owned(),
        }
    }

    pub(crate) fn empty_or_white_space_string(param_name: &str) -> Self {
        Self::EmptyOrWhiteSpaceString {
            param_name: param_name.to_owned(),
        }
    }

    /// Name of the parameter that failed.
    ///
    /// For property failures this is the owning argument, not the property.
    pub fn param_name(&self) -> &str {
        match self {
            Self::NullArgument { param_name }
            | Self::NullProperty { param_name, .. }
            | Self::EmptyString { param_name }
            | Self::EmptyOrWhiteSpaceString { param_name } => param_name,
        }
    }

    /// Name of the absent property, for property failures.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Self::NullProperty { property_name, .. } => Some(property_name),
            _ => None,
        }
    }

    /// Whether the argument was absent or present-but-invalid.
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            Self::NullArgument { .. } => GuardErrorKind::NullArgument,
            Self::NullProperty { .. }
            | Self::EmptyString { .. }
            | Self::EmptyOrWhiteSpaceString { .. } => GuardErrorKind::InvalidArgument,
        }
    }
}
