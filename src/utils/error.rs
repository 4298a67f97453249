use thiserror::Error;

/// Message returned when the caller does not send exactly six points.
pub const POINT_COUNT_MESSAGE: &str = "باید دقیقا ۶ نقطه ارسال شود.";

/// Prefix of every message caused by the upstream routing service.
pub const UPSTREAM_MESSAGE_PREFIX: &str = "خطا در ارتباط با ORS";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("expected {expected} points, got {actual}")]
    PointCountError { expected: usize, actual: usize },

    #[error("Malformed request: {message}")]
    MalformedRequestError { message: String },

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream response error: {message}")]
    UpstreamResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something the relay cannot forward.
    Client,
    /// The routing service failed or answered with an unusable body.
    Upstream,
    /// Startup configuration is wrong.
    Configuration,
    /// Local IO failure.
    System,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::PointCountError { .. } | RelayError::MalformedRequestError { .. } => {
                ErrorCategory::Client
            }
            RelayError::UpstreamError(_) | RelayError::UpstreamResponseError { .. } => {
                ErrorCategory::Upstream
            }
            RelayError::ConfigError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RelayError::IoError(_) => ErrorCategory::System,
        }
    }

    /// HTTP status code the error maps to when it terminates a request.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            _ => 500,
        }
    }

    /// Text placed in the `message` field of the error body.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::PointCountError { .. } => POINT_COUNT_MESSAGE.to_string(),
            RelayError::MalformedRequestError { message } => message.clone(),
            RelayError::UpstreamError(e) => format!("{}: {}", UPSTREAM_MESSAGE_PREFIX, e),
            RelayError::UpstreamResponseError { message } => {
                format!("{}: {}", UPSTREAM_MESSAGE_PREFIX, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Send exactly six [longitude, latitude] pairs under \"points\"",
            ErrorCategory::Upstream => {
                "Check ORS_API_KEY and that the routing endpoint is reachable"
            }
            ErrorCategory::Configuration => "Fix the configuration value and restart the relay",
            ErrorCategory::System => "Check file permissions and disk state",
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
