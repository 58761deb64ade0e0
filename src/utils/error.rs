use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Cannot access '{path}': {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumberError { field: String, value: String },

    #[error("Input closed while waiting for: {prompt}")]
    InputClosedError { prompt: String },

    #[error("Malformed driver record on line {line}: {reason}")]
    MalformedDriverRecord { line: u64, reason: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    FileSystem,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::InvalidNumberError { .. } | OrderError::InputClosedError { .. } => {
                ErrorCategory::Input
            }
            OrderError::ConfigValidationError { .. }
            | OrderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            OrderError::IoError(_) | OrderError::FileAccessError { .. } => {
                ErrorCategory::FileSystem
            }
            OrderError::CsvError(_) | OrderError::MalformedDriverRecord { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrderError::MalformedDriverRecord { .. } => ErrorSeverity::Low,
            OrderError::CsvError(_) | OrderError::FileAccessError { .. } => ErrorSeverity::Medium,
            OrderError::InvalidNumberError { .. }
            | OrderError::InputClosedError { .. }
            | OrderError::ConfigValidationError { .. }
            | OrderError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            OrderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderError::InvalidNumberError { field, .. } => format!(
                "Restart the order and enter a whole number or decimal value for {}",
                field
            ),
            OrderError::InputClosedError { .. } => {
                "Run the program interactively or provide every answer on standard input"
                    .to_string()
            }
            OrderError::MalformedDriverRecord { .. } => {
                "Fix the line so it reads 'name, location, load'".to_string()
            }
            OrderError::CsvError(_) => {
                "Check the drivers file for stray quotes or invalid UTF-8".to_string()
            }
            OrderError::FileAccessError { path, .. } => format!(
                "Check that '{}' exists and that the current user can access it",
                path
            ),
            OrderError::ConfigValidationError { field, .. }
            | OrderError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting in the config file or on the command line", field)
            }
            OrderError::IoError(_) => "Check disk space and terminal state".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::InvalidNumberError { field, value } => {
                format!("'{}' is not a valid {}", value, field)
            }
            OrderError::InputClosedError { .. } => {
                "Input ended before the order was complete".to_string()
            }
            OrderError::FileAccessError { path, source } => {
                format!("Could not use file '{}': {}", path, source)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_is_high_severity_input_error() {
        let err = OrderError::InvalidNumberError {
            field: "quantity".to_string(),
            value: "two".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "'two' is not a valid quantity");
        assert!(err.recovery_suggestion().contains("quantity"));
    }

    #[test]
    fn test_io_error_converts_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: OrderError = io.into();
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
