//! Contract error types for the settings form service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Settings form domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Tab, section, or field not found
    NotFound {
        /// Resource type (tab, section, field)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Submitted payload could not be interpreted
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error (storage failures and the like)
    Internal,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
