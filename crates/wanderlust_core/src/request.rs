//! Request and response types for text generation.

use crate::Message;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(150))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(150));
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier overriding the driver's default
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The raw text a model produced.
///
/// # Examples
///
/// ```
/// use wanderlust_core::GenerateResponse;
///
/// let response = GenerateResponse::new("title: Sunset at Marine Drive");
/// assert!(!response.is_empty());
/// assert!(GenerateResponse::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, possibly empty
    pub text: String,
}

impl GenerateResponse {
    /// Wraps generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the model produced no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
