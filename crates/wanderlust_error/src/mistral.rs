//! Mistral provider error types and retry classification.

/// Mistral-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MistralErrorKind {
    /// API key not found in the configured environment variable
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to build the HTTP client
    #[display("Failed to create Mistral client: {}", _0)]
    ClientCreation(String),
    /// Request never reached the server or the connection dropped
    #[display("Mistral request failed: {}", _0)]
    Transport(String),
    /// Request timed out
    #[display("Mistral request timed out: {}", _0)]
    Timeout(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse Mistral response: {}", _0)]
    ResponseParsing(String),
}

impl MistralErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            MistralErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            MistralErrorKind::Transport(_) => true,
            MistralErrorKind::Timeout(_) => true,
            _ => false,
        }
    }
}

/// Mistral error with source location tracking.
///
/// # Examples
///
/// ```
/// use wanderlust_error::{MistralError, MistralErrorKind};
///
/// let err = MistralError::new(MistralErrorKind::MissingApiKey("MISTRAL_API_KEY".to_string()));
/// assert!(format!("{}", err).contains("MISTRAL_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Mistral Error: {} at line {} in {}", kind, line, file)]
pub struct MistralError {
    /// The kind of error that occurred
    pub kind: MistralErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MistralError {
    /// Create a new MistralError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MistralErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Mistral operations.
pub type MistralResult<T> = Result<T, MistralError>;

/// Trait for errors that support retry logic.
///
/// Lets an error say whether the call that produced it is worth repeating.
/// How long to wait between attempts is the caller's retry policy.
///
/// # Examples
///
/// ```
/// use wanderlust_error::{MistralError, MistralErrorKind, RetryableError};
///
/// let err = MistralError::new(MistralErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network timeouts should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for MistralError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
