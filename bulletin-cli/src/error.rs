//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input matched the provided patterns
    NoInput,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Unrecognized output format name
    UnknownFormat(String),
    /// Rule file failed to load or validate
    InvalidRules(String),
    /// Worker thread count out of range
    InvalidThreads(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::UnknownFormat(name) => write!(f, "Unknown output format: {name}"),
            CliError::InvalidRules(msg) => write!(f, "Invalid rule set: {msg}"),
            CliError::InvalidThreads(n) => {
                write!(f, "Thread count must be greater than 0 (got {n})")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_error_display() {
        assert_eq!(
            CliError::NoInput.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_unknown_format_error_display() {
        let error = CliError::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_invalid_rules_error_display() {
        let error = CliError::InvalidRules("min_words must be at least 1".to_string());
        assert!(error.to_string().starts_with("Invalid rule set:"));
    }

    #[test]
    fn test_invalid_threads_error_display() {
        let error = CliError::InvalidThreads(0);
        assert!(error.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInput.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
