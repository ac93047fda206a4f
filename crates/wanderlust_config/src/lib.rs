//! Configuration for Wanderlust.
//!
//! Values come from a bundled `wanderlust.toml`, optionally overridden by
//! user files and `WANDERLUST__<SECTION>__<KEY>` environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    GenerationConfig, ProviderConfig, RetryConfig, SessionConfig, WanderlustConfig,
};
