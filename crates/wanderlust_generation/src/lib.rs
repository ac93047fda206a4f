//! Activity, quest and challenge generation.
//!
//! [`prompt`] builds the plain-text instructions that ask a model for
//! `key: value` lines. [`Generator`] sends them through an
//! [`Acquirer`](wanderlust_models::Acquirer) and turns the answers into
//! records with `wanderlust_parser`, filling in defaults so callers always
//! get something to show.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
pub mod prompt;

pub use generator::{
    CHALLENGE_ACTIVITIES, DEFAULT_CHALLENGE_ACTIVITIES, DEFAULT_QUEST_STEPS, Generator,
    QUEST_STEPS,
};
