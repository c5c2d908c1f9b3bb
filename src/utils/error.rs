use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed input in {path}: {message}")]
    MalformedInput { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template error: {message}")]
    TemplateError { message: String },
}

/// The three kinds of failure a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileNotFound,
    MalformedInput,
    Unexpected,
}

impl GeneratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeneratorError::FileNotFound { .. } => ErrorCategory::FileNotFound,
            GeneratorError::MalformedInput { .. } => ErrorCategory::MalformedInput,
            _ => ErrorCategory::Unexpected,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeneratorError::FileNotFound { path } => {
                format!("Error: {} file not found.", path)
            }
            GeneratorError::MalformedInput { path, .. } => {
                format!("Error: Invalid JSON format in the file {}.", path)
            }
            other => format!("An error occurred: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::FileNotFound => {
                "Check that the input file exists, or pass its location with --input"
            }
            ErrorCategory::MalformedInput => {
                "The input must be a JSON array of animal objects"
            }
            ErrorCategory::Unexpected => {
                "Check the output location is writable and the configuration is valid"
            }
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Unexpected => 1,
            ErrorCategory::FileNotFound => 2,
            ErrorCategory::MalformedInput => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let missing = GeneratorError::FileNotFound {
            path: "animals_data.json".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::FileNotFound);
        assert_eq!(
            missing.user_friendly_message(),
            "Error: animals_data.json file not found."
        );

        let malformed = GeneratorError::MalformedInput {
            path: "animals_data.json".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(malformed.category(), ErrorCategory::MalformedInput);

        let io = GeneratorError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.category(), ErrorCategory::Unexpected);
        assert!(io.user_friendly_message().starts_with("An error occurred:"));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            GeneratorError::FileNotFound { path: String::new() }.exit_code(),
            GeneratorError::MalformedInput {
                path: String::new(),
                message: String::new(),
            }
            .exit_code(),
            GeneratorError::ConfigError {
                message: String::new(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [2, 3, 1]);
    }
}
