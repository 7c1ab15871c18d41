//! Error types for the leave desk service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all expected failure conditions. The HTTP layer maps each variant to
//! a status code in [`crate::api`].

use thiserror::Error;

/// The main error type for the leave desk service.
///
/// All operations return this error type, making it easy to handle
/// failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_desk::error::HrError;
///
/// let error = HrError::not_found("Request");
/// assert_eq!(error.to_string(), "Request not found");
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// No identity was asserted on the request.
    #[error("Missing X-User-Id")]
    Unauthenticated,

    /// The asserted identity is unknown or inconsistent with stored data.
    #[error("{message}")]
    Unauthorized {
        /// A description of the identity failure.
        message: String,
    },

    /// The actor's role or team scope does not permit the operation.
    #[error("{message}")]
    Forbidden {
        /// A description of the refused operation.
        message: String,
    },

    /// The request payload failed validation.
    #[error("{message}")]
    Validation {
        /// A description of the validation failure.
        message: String,
        /// The offending field names, when the failure is per-field.
        fields: Vec<String>,
    },

    /// A referenced record does not exist.
    #[error("{what} not found")]
    NotFound {
        /// What was being looked up.
        what: String,
    },

    /// An unexpected failure, e.g. storage I/O.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the underlying failure. Logged server-side,
        /// never sent to clients.
        message: String,
    },
}

impl HrError {
    /// Creates an [`HrError::Unauthorized`] with the given message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates an [`HrError::Forbidden`] with the given message.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates an [`HrError::Validation`] with a message and no field list.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates an [`HrError::Validation`] listing the missing fields.
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::Validation {
            message: "Missing fields".to_string(),
            fields,
        }
    }

    /// Creates an [`HrError::NotFound`] for the given subject.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Creates an [`HrError::Internal`] with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for HrError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<serde_json::Error> for HrError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<csv::Error> for HrError {
    fn from(err: csv::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// A type alias for Results that return [`HrError`].
pub type HrResult<T> = Result<T, HrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_names_the_header() {
        assert_eq!(HrError::Unauthenticated.to_string(), "Missing X-User-Id");
    }

    #[test]
    fn test_missing_fields_carries_field_names() {
        let error = HrError::missing_fields(vec!["start_date".into(), "reason".into()]);
        match error {
            HrError::Validation { message, fields } => {
                assert_eq!(message, "Missing fields");
                assert_eq!(fields, vec!["start_date", "reason"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_displays_subject() {
        assert_eq!(HrError::not_found("Request").to_string(), "Request not found");
    }

    #[test]
    fn test_io_error_becomes_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: HrError = io.into();
        assert!(matches!(error, HrError::Internal { .. }));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HrError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn fails() -> HrResult<()> {
            Err(HrError::forbidden("nope"))
        }

        fn propagates() -> HrResult<()> {
            fails()?;
            Ok(())
        }

        assert!(propagates().is_err());
    }
}
