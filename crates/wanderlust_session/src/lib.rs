//! Session bookkeeping for Wanderlust.
//!
//! Completing an activity earns points by difficulty and may unlock an
//! achievement. Everything lives in memory for the lifetime of one
//! [`Session`]; nothing is persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod achievement;
mod points;
mod session;

pub use achievement::Achievement;
pub use points::award_points;
pub use session::{Completion, Session};
