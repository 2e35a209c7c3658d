use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Empty response from {path}")]
    EmptyResponseError { path: String },

    #[error("Invalid request: {message}")]
    InvalidRequestError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
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
    Network,
    Server,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::TransportError(_) => ErrorCategory::Network,
            ClientError::ApiError { .. } => ErrorCategory::Server,
            ClientError::SerializationError(_)
            | ClientError::EmptyResponseError { .. }
            | ClientError::InvalidRequestError { .. } => ErrorCategory::Data,
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClientError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 伺服器 5xx 與網路問題通常可以稍後再試
            ClientError::TransportError(_) => ErrorSeverity::Medium,
            ClientError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ClientError::ApiError { .. } => ErrorSeverity::High,
            ClientError::SerializationError(_)
            | ClientError::EmptyResponseError { .. }
            | ClientError::InvalidRequestError { .. } => ErrorSeverity::High,
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ClientError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClientError::TransportError(_) => {
                "Check the network connection and that --base-url points at a reachable server"
                    .to_string()
            }
            ClientError::ApiError { status: 404, .. } => {
                "The requested record does not exist; list the collection to find a valid id"
                    .to_string()
            }
            ClientError::ApiError { status, .. } if *status >= 500 => {
                "The server failed to handle the request; try again later".to_string()
            }
            ClientError::ApiError { .. } => {
                "Check the submitted fields against what the server expects".to_string()
            }
            ClientError::SerializationError(_) | ClientError::EmptyResponseError { .. } => {
                "The server response did not match the expected format; verify the API version"
                    .to_string()
            }
            ClientError::InvalidRequestError { .. } => {
                "Check the request method, headers and body".to_string()
            }
            ClientError::IoError(_) => "Check file paths and permissions".to_string(),
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError { status, body } if body.trim().is_empty() => {
                format!("Server returned status {}", status)
            }
            ClientError::ApiError { status, body } => {
                format!("Server returned status {}: {}", status, body.trim())
            }
            ClientError::TransportError(_) => "Could not reach the placement server".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::ApiError { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
