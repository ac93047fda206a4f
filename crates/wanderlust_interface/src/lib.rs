//! Trait definitions for Wanderlust model drivers.
//!
//! The record parser never talks to a model. Everything that does goes
//! through [`WanderlustDriver`], so providers, retry decorators and test
//! doubles are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::WanderlustDriver;
