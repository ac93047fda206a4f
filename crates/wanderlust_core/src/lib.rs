//! Core data types for Wanderlust.
//!
//! This crate provides the chat types exchanged with model providers and the
//! record types produced by the record parser.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod activity;
mod category;
mod message;
mod record;
mod request;
mod role;

pub use activity::Activity;
pub use category::{Category, Difficulty};
pub use message::Message;
pub use record::{ActivityRecord, FlatRecord, QuestStep};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse};
pub use role::Role;
