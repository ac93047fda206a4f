//! Error types for Wanderlust.
//!
//! This crate provides the foundation error types used throughout the Wanderlust workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The record parser has no error type of its own. Malformed model output
//! degrades to absent fields, so nothing in this crate describes parsing.
//!
//! # Examples
//!
//! ```
//! use wanderlust_error::{WanderlustResult, ConfigError};
//!
//! fn fetch_data() -> WanderlustResult<String> {
//!     Err(ConfigError::new("retry.max_attempts must be at least 1"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod io;
mod json;
mod mistral;
mod session;

pub use config::ConfigError;
pub use error::{WanderlustError, WanderlustErrorKind, WanderlustResult};
pub use io::IoError;
pub use json::JsonError;
pub use mistral::{MistralError, MistralErrorKind, MistralResult, RetryableError};
pub use session::{SessionError, SessionErrorKind};
