//! Error types for the checker.
//!
//! Rejections raised before a pair reaches the core carry the exact message
//! shown to the user.

use crate::models::Position;
use crate::utils::geometry::Triple;
use thiserror::Error;

/// Why a submitted pair was not checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// One of the inputs is not three integers
    #[error("Please enter valid triples in the format: 3,4,5 or (3,4,5) or [3,4,5]")]
    Unparseable,

    /// Both inputs parsed to the same triple
    #[error("Please enter two different triples")]
    Identical,

    /// The triple fails the sorted Pythagorean check
    #[error("{position} triple {triple} is not a valid Pythagorean triple")]
    NotPythagorean { position: Position, triple: Triple },

    /// The triple has a zero or negative value and strict checking is on
    #[error("{position} triple {triple} must contain only positive integers")]
    NonPositive { position: Position, triple: Triple },
}

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting holds a value it cannot take
    #[error("Invalid value for {key}: {value:?} (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckError::NotPythagorean {
            position: Position::First,
            triple: Triple::new(3, 4, 6),
        };
        assert_eq!(
            err.to_string(),
            "First triple (3, 4, 6) is not a valid Pythagorean triple"
        );

        let err = CheckError::NonPositive {
            position: Position::Second,
            triple: Triple::new(0, 0, 0),
        };
        assert_eq!(
            err.to_string(),
            "Second triple (0, 0, 0) must contain only positive integers"
        );

        assert_eq!(
            CheckError::Identical.to_string(),
            "Please enter two different triples"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "EULERBRICK_PROGRESS",
            value: "maybe".to_string(),
            expected: "a boolean",
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for EULERBRICK_PROGRESS: \"maybe\" (expected a boolean)"
        );
    }
}
