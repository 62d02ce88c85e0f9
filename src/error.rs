//! Error types for simdarray operations.
//!
//! Only a handful of operations can fail: the order statistics and `average`
//! have no answer for an empty array, and the transforms that work on a window
//! of the caller's array check that the window exists. Everything else is
//! total over its input.

use std::fmt;

/// Errors that can occur during simdarray operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// An argument is outside the domain of the operation.
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable error message.
        message: String,
    },
    /// An ndarray view does not cover one contiguous, ordered slice of memory.
    NonContiguous {
        /// The operation that required contiguous storage.
        operation: &'static str,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::InvalidArgument { name, message } => {
                write!(f, "Invalid argument `{}`: {}", name, message)
            }
            ArrayError::NonContiguous { operation } => write!(
                f,
                "Non-contiguous input: `{}` needs a standard-layout array",
                operation
            ),
        }
    }
}

impl std::error::Error for ArrayError {}

/// Result type alias for simdarray operations.
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Creates an invalid argument error.
pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> ArrayError {
    ArrayError::InvalidArgument {
        name,
        message: message.into(),
    }
}

/// Creates a non-contiguous input error.
pub fn non_contiguous(operation: &'static str) -> ArrayError {
    ArrayError::NonContiguous { operation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = invalid_argument("array", "the input array was empty");
        let display = format!("{}", error);
        assert!(display.contains("Invalid argument"));
        assert!(display.contains("`array`"));
        assert!(display.contains("the input array was empty"));
    }

    #[test]
    fn test_non_contiguous_display() {
        let error = non_contiguous("simd_max");
        let display = format!("{}", error);
        assert!(display.contains("Non-contiguous input"));
        assert!(display.contains("simd_max"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = invalid_argument("count", "test");
        let error2 = invalid_argument("count", "test");
        let error3 = invalid_argument("length", "test");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
        assert_ne!(error1, non_contiguous("test"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_argument("array", "test error");

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        // Simple errors carry no source
        assert!(std::error::Error::source(&error).is_none());
    }
}
