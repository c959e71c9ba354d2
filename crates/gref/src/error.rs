//! Error types for gref.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Every error is recovered at the command boundary except the ones
//! [`CommandError::is_fatal`] reports.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }
}

/// Errors from the file-backed record store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data directory failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A collection file exists but does not parse.
    #[error("Incompatible format in {}: {source}", path.display())]
    Corrupt {
        /// Offending file
        path: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a collection failed.
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// `create` on a name that is taken.
    #[error("Collection already exists: {0}")]
    AlreadyExists(String),

    /// `load` or `remove` on a name that is absent.
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// Name cannot be used as a file stem.
    #[error("Invalid collection name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl StoreError {
    /// Wrap an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create an invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidName { name: name.into(), reason }
    }
}

/// Errors from the external graph renderer.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The renderer binary could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The renderer ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        /// Program that was invoked
        program: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },
}

/// Errors raised while executing a REPL command.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Error from the record store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error from the renderer
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Command used with missing or malformed arguments, or in the wrong state.
    #[error("{0}")]
    Usage(String),

    /// Verb not recognized.
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Console or export I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Create a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Whether the command loop must stop.
    ///
    /// Only raw I/O failures are fatal; a collection file that does not
    /// parse is reported like any other problem.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Store(StoreError::Io { .. }))
    }

    /// Convert to a user-friendly message for the prompt.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!(
                    "Rate limited by Semantic Scholar API. Please wait {:?} before retrying.",
                    retry_after
                )
            }
            Self::Client(ClientError::NotFound { resource }) => {
                format!("Not found: {resource}. Please check the ID is correct.")
            }
            Self::Store(StoreError::AlreadyExists(_)) => "Filepath already exists!".to_string(),
            Self::Store(StoreError::NotFound(_)) => "File does not exist!".to_string(),
            Self::Store(StoreError::Corrupt { .. }) => "Incompatible format!".to_string(),
            Self::Unknown(_) => "Unknown command! (try `HELP`)".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for command execution.
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_retryable() {
        assert!(ClientError::rate_limited(60).is_retryable());
        assert!(ClientError::server(500, "Internal error").is_retryable());

        assert!(!ClientError::not_found("paper123").is_retryable());
        assert!(!ClientError::bad_request("invalid query").is_retryable());
    }

    #[test]
    fn test_fatal_classification() {
        let io = std::io::Error::other("disk gone");
        assert!(CommandError::Store(StoreError::io("gref/json", io)).is_fatal());
        assert!(CommandError::Io(std::io::Error::other("stdout closed")).is_fatal());

        assert!(!CommandError::Store(StoreError::NotFound("demo".into())).is_fatal());
        assert!(!CommandError::usage("No query provided!").is_fatal());
        assert!(!CommandError::Client(ClientError::not_found("p1")).is_fatal());
    }

    #[test]
    fn test_corrupt_store_is_recoverable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CommandError::Store(StoreError::Corrupt { path: "x.json".into(), source });
        assert!(!err.is_fatal());
        assert_eq!(err.to_user_message(), "Incompatible format!");
    }

    #[test]
    fn test_user_messages() {
        let err = CommandError::Store(StoreError::NotFound("demo".into()));
        assert_eq!(err.to_user_message(), "File does not exist!");

        let err = CommandError::Client(ClientError::not_found("p1"));
        assert!(err.to_user_message().contains("p1"));

        let err = CommandError::usage("No filename provided!");
        assert_eq!(err.to_user_message(), "No filename provided!");
    }
}
