use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapiError {
    #[error("Use: {program} <episode Number>")]
    UsageError { program: String },

    #[error("API request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Film response is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected film response shape at '{field}': {reason}")]
    ShapeError { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Network,
    Parse,
    Shape,
    Configuration,
    Io,
}

impl SwapiError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SwapiError::TransportError {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn shape(field: &str, reason: impl Into<String>) -> Self {
        SwapiError::ShapeError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SwapiError::UsageError { .. } => ErrorCategory::Usage,
            SwapiError::TransportError { .. } => ErrorCategory::Network,
            SwapiError::ParseError(_) => ErrorCategory::Parse,
            SwapiError::ShapeError { .. } => ErrorCategory::Shape,
            SwapiError::ConfigError { .. } | SwapiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SwapiError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// Process exit status for this error. Success is always 0 and is never produced here.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Shape => 4,
            ErrorCategory::Configuration => 5,
            ErrorCategory::Io => 6,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SwapiError::UsageError { .. } => self.to_string(),
            SwapiError::TransportError { url, .. } => {
                format!("Could not reach the film API at {}", url)
            }
            SwapiError::ParseError(_) => "The film API returned a body that is not JSON".to_string(),
            SwapiError::ShapeError { field, .. } => {
                format!("The film response has no usable '{}' list", field)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Pass the episode number as the first argument",
            ErrorCategory::Network => "Check your network connection and the --base-url value",
            ErrorCategory::Parse => "Make sure --base-url points at a SWAPI-compatible JSON API",
            ErrorCategory::Shape => "Check that the episode number names an existing film",
            ErrorCategory::Configuration => "Fix the --base-url flag, SWAPI_BASE_URL or the config file",
            ErrorCategory::Io => "Check that standard output and the config file are accessible",
        }
    }
}

pub type Result<T> = std::result::Result<T, SwapiError>;
