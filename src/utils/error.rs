use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PricingError::TomlError(_)
            | PricingError::ConfigValidationError { .. }
            | PricingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PricingError::CsvError(_) | PricingError::SerializationError(_) => ErrorCategory::Input,
            PricingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PricingError::IoError(e) => format!("Could not read or write a file: {}", e),
            PricingError::CsvError(e) => format!("The CSV input could not be processed: {}", e),
            PricingError::SerializationError(e) => format!("Could not encode the result: {}", e),
            PricingError::TomlError(_) => "The pricing configuration file is not valid TOML".to_string(),
            PricingError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PricingError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PricingError::IoError(_) => "Check that the path exists and is readable/writable",
            PricingError::CsvError(_) => {
                "Make sure the CSV has a header row and consistent column counts"
            }
            PricingError::SerializationError(_) => "Re-run with --verbose and report the failing input",
            PricingError::TomlError(_) => "Fix the TOML syntax, or remove the file to use defaults",
            PricingError::ConfigValidationError { .. }
            | PricingError::InvalidConfigValueError { .. } => {
                "Commission percentages must be numbers between 0 and 100"
            }
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input | ErrorCategory::System => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = PricingError::InvalidConfigValueError {
            field: "commission.agency.sawa_percent".to_string(),
            value: "120".to_string(),
            reason: "Value must be between 0 and 100".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("120"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = PricingError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.csv",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 2);
    }
}
