//! Message types for chat requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat request.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Suggest a street food walk");
/// assert_eq!(message.role, Role::User);
/// assert!(message.content.contains("street food"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub content: String,
}

impl Message {
    /// Creates a message with the given role and text.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Shorthand for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
