//! Wanderlust: model-generated local activities.
//!
//! Wanderlust asks a chat model for activity suggestions around a configured
//! location, reads the loosely formatted `key: value` answers back into typed
//! records, and keeps score of what the user completes.
//!
//! # Architecture
//!
//! Wanderlust is organized as a workspace with focused crates:
//!
//! - `wanderlust_error` - Error types
//! - `wanderlust_core` - Chat and record types
//! - `wanderlust_interface` - `WanderlustDriver` trait definition
//! - `wanderlust_config` - Layered TOML configuration
//! - `wanderlust_parser` - Tolerant `key: value` record parser
//! - `wanderlust_models` - Mistral client, retry decorator, acquirer
//! - `wanderlust_session` - Points, achievements, session
//! - `wanderlust_generation` - Prompts and generation
//!
//! This crate (`wanderlust`) re-exports everything for convenience and adds
//! text rendering, offline parsing and the interactive explorer used by the
//! `wanderlust` binary.
//!
//! # Quick Start
//!
//! ```
//! use wanderlust::{Category, RecordKind, Parsed, parse_text};
//!
//! let parsed = parse_text(RecordKind::Activity, "title: Chowpatty bhel", Category::Food);
//! let Parsed::Activity(activity) = parsed else { unreachable!() };
//! assert_eq!(activity.title(), "Chowpatty bhel");
//! assert_eq!(activity.description(), "Missing");
//! ```
//!
//! # Cargo Features
//!
//! - `mistral` (default) - Mistral chat-completions provider
//! - `api` - Enables tests that call the live API

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod explore;
mod offline;
pub mod render;

pub use explore::{ExploreCommand, ExploreLine, Explorer, Outcome};
pub use offline::{Parsed, RecordKind, parse_text};

// Re-export workspace crates
pub use wanderlust_config::*;
pub use wanderlust_core::*;
pub use wanderlust_error::*;
pub use wanderlust_generation::*;
pub use wanderlust_interface::*;
pub use wanderlust_models::*;
pub use wanderlust_parser::*;
pub use wanderlust_session::*;

/// Builds the production generator: Mistral client, retry decorator,
/// acquirer with the configured system prompt.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client cannot be
/// created.
#[cfg(feature = "mistral")]
pub fn mistral_generator(
    config: &WanderlustConfig,
) -> WanderlustResult<Generator<RetryingDriver<MistralClient>>> {
    let client = MistralClient::from_config(&config.provider)?;
    let driver = RetryingDriver::new(client, RetryPolicy::from(&config.retry));
    let acquirer = Acquirer::new(driver, config.provider.system_prompt.clone());
    Ok(Generator::new(acquirer, config.generation.clone()))
}
