//! Record parser for model-generated activity text.
//!
//! Models are asked to answer with one `key: value` pair per line. They
//! mostly do, but not reliably: prose, markdown punctuation, odd casing,
//! missing or repeated fields all show up. This crate turns that text into
//! typed records without ever failing. Unusable lines are reported through
//! `tracing` and skipped, and the worst outcome is an empty result.
//!
//! Two shapes are supported:
//!
//! - **flat** records, one field per line (`title: ...`), see [`parse_flat_record`]
//! - **grouped** records, `<prefix><n>_<field>: ...`, see [`parse_grouped`]
//!
//! Filling in absent fields is the caller's job; [`defaults`] holds the
//! sentinel values the application uses.
//!
//! # Examples
//!
//! ```
//! use wanderlust_parser::{parse_activity, parse_quest_steps};
//!
//! let activity = parse_activity("Title: Chowpatty sunset\ndifficulty: Easy\nnot a field");
//! assert_eq!(activity.title.as_deref(), Some("Chowpatty sunset"));
//! assert!(activity.time_estimate.is_none());
//!
//! let steps = parse_quest_steps("step1_title: A\nstep2_title: B");
//! assert_eq!(steps.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod defaults;
mod flat;
mod grouped;
mod line;
mod normalize;

pub use defaults::{
    MISSING, activities_or_placeholder, apply_defaults, or_placeholder,
    placeholder_challenge_activity, placeholder_step, steps_or_placeholder,
};
pub use flat::{parse_activity, parse_flat_record};
pub use grouped::{
    GroupedRecord, Ordinal, parse_challenge_activities, parse_grouped, parse_quest_steps,
    serialize_grouped,
};
pub use normalize::strip_markup;
