//! Mistral chat-completions provider.

mod client;
mod dto;

pub use client::MistralClient;
