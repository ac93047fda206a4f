//! Session bookkeeping error types.

/// Specific error conditions for session operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Username was empty or whitespace
    #[display("Username cannot be empty")]
    EmptyUsername,
    /// No activity has been generated yet in this session
    #[display("No activity to {}: generate one first", _0)]
    NoCurrentActivity(String),
}

/// Error type for session operations.
///
/// # Examples
///
/// ```
/// use wanderlust_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::EmptyUsername);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
