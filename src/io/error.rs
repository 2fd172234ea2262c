//! Error types for generation and configuration

use std::fmt;

/// Main error type for all generator operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Every attempt failed to produce an acceptable pattern
    ///
    /// The retry loop is bounded; configurations whose target length, grid
    /// size, and difficulty rules cannot be satisfied surface here instead of
    /// hanging the caller.
    AttemptsExhausted {
        /// Attempts consumed before giving up
        attempts: usize,
        /// Target chain length that was never reached or never accepted
        max_count: usize,
        /// Lattice side length the attempts ran on
        grid_size: usize,
    },

    /// Requested colour set does not exist
    UnknownPalette {
        /// Tag that matched no palette
        name: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::AttemptsExhausted {
                attempts,
                max_count,
                grid_size,
            } => {
                write!(
                    f,
                    "No pattern of {max_count} triangles found on a {grid_size}x{grid_size} grid within {attempts} attempts"
                )
            }
            Self::UnknownPalette { name } => {
                write!(f, "Unknown palette '{name}'")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerationError, invalid_parameter};

    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("max_count", &0, &"at least one triangle is required");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'max_count' = '0': at least one triangle is required"
        );
    }

    #[test]
    fn test_exhaustion_display_names_the_configuration() {
        let error = GenerationError::AttemptsExhausted {
            attempts: 500,
            max_count: 20,
            grid_size: 5,
        };
        let message = error.to_string();
        assert!(message.contains("20 triangles"));
        assert!(message.contains("5x5"));
        assert!(message.contains("500 attempts"));
    }
}
