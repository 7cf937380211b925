//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or null
    Missing { field: &'static str },

    /// Value could not be read as an integer
    NotAnInteger { value: String },

    /// Integer outside the range the column can hold
    OutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{}'", field),
            Self::NotAnInteger { value } => write!(f, "'{}' is not an integer", value),
            Self::OutOfRange { field, value } => {
                write!(f, "{} value {} is out of range", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "missing required field 'answer'");

        let err = ValidationError::NotAnInteger {
            value: "three".into(),
        };
        assert_eq!(err.to_string(), "'three' is not an integer");
    }
}
