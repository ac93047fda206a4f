//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
///
/// Serializes lowercase, the form chat-completions endpoints expect.
///
/// # Examples
///
/// ```
/// use wanderlust_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(format!("{}", Role::System), "System");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the prompt
    User,
    /// Assistant messages are from the model
    Assistant,
}
