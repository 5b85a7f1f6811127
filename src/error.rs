//! Error types for the Caesar toolkit.

use thiserror::Error;

/// Errors produced by the Caesar toolkit.
///
/// Every operation over well-formed text is total; errors only come from
/// caller-supplied arguments that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// An argument could not be interpreted (e.g. a key that is not an integer).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The text is shorter than the minimum length required for analysis.
    #[error("Input must be at least {min} characters long (got {actual})")]
    InputTooShort { min: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = CipherError::InvalidArgument("key 'x' is not an integer".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: key 'x' is not an integer"
        );
    }

    #[test]
    fn test_display_input_too_short() {
        let err = CipherError::InputTooShort { min: 16, actual: 3 };
        assert_eq!(
            format!("{}", err),
            "Input must be at least 16 characters long (got 3)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::InputTooShort { min: 16, actual: 3 },
            CipherError::InputTooShort { min: 16, actual: 3 }
        );
        assert_ne!(
            CipherError::InputTooShort { min: 16, actual: 3 },
            CipherError::InvalidArgument(String::new())
        );
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::InvalidArgument("abc".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
