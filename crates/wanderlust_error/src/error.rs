//! Top-level error wrapper types.

use crate::{
    ConfigError, IoError, JsonError, MistralError, RetryableError, SessionError,
};

/// Every error condition a Wanderlust operation can surface.
///
/// # Examples
///
/// ```
/// use wanderlust_error::{WanderlustError, IoError};
///
/// let io_err = IoError::new("stdin closed");
/// let err: WanderlustError = io_err.into();
/// assert!(format!("{}", err).contains("stdin closed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WanderlustErrorKind {
    /// I/O error
    #[from(IoError)]
    Io(IoError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Mistral provider error
    #[from(MistralError)]
    Mistral(MistralError),
    /// Session bookkeeping error
    #[from(SessionError)]
    Session(SessionError),
}

/// Wanderlust error with kind discrimination.
///
/// # Examples
///
/// ```
/// use wanderlust_error::{WanderlustError, WanderlustResult, ConfigError};
///
/// fn might_fail() -> WanderlustResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Wanderlust Error: {}", _0)]
pub struct WanderlustError(Box<WanderlustErrorKind>);

impl WanderlustError {
    /// Create a new error from a kind.
    pub fn new(kind: WanderlustErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WanderlustErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WanderlustErrorKind
impl<T> From<T> for WanderlustError
where
    T: Into<WanderlustErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for WanderlustError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            WanderlustErrorKind::Mistral(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for Wanderlust operations.
pub type WanderlustResult<T> = std::result::Result<T, WanderlustError>;
