use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Identity acquisition failed: {reason}")]
    AcquisitionError { reason: String },

    #[error("Identity payload could not be parsed: {message}")]
    ParseError { message: String },

    #[error("Identity acquisition timed out after {seconds}s")]
    TimeoutError { seconds: u64 },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GateError {
    /// Failures that happen while resolving who the caller is. The gate turns
    /// every one of these into a forbidden response. A request carrying no
    /// identity is `Ok(None)` from the source, not an error.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            GateError::AcquisitionError { .. }
                | GateError::ParseError { .. }
                | GateError::TimeoutError { .. }
                | GateError::HttpError(_)
                | GateError::SerializationError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GateError::ConfigError { .. }
            | GateError::ConfigValidationError { .. }
            | GateError::MissingConfigError { .. }
            | GateError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            GateError::IoError(e) => format!("File system error: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GateError::MissingConfigError { .. } => {
                "Set the missing value in the config file or via its GATE_* environment variable"
            }
            GateError::InvalidConfigValueError { .. } | GateError::ConfigValidationError { .. } => {
                "Fix the reported field in the config file and restart"
            }
            GateError::ConfigError { .. } => "Check that the config file is valid TOML",
            GateError::IoError(_) => "Check that the path exists and is readable",
            GateError::TimeoutError { .. } | GateError::HttpError(_) => {
                "Check that the authentication endpoint is reachable from the gate"
            }
            _ => "Check the logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
