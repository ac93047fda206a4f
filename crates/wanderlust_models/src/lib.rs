//! Model provider integrations for Wanderlust.
//!
//! - [`MistralClient`] talks to a chat-completions endpoint (feature `mistral`, on by default)
//! - [`RetryingDriver`] wraps any [`WanderlustDriver`] in bounded exponential backoff
//! - [`Acquirer`] turns a prompt into raw text, degrading to `""` on failure
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "mistral")]
//! # {
//! use wanderlust_config::WanderlustConfig;
//! use wanderlust_models::{Acquirer, MistralClient, RetryPolicy, RetryingDriver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WanderlustConfig::load()?;
//! let client = MistralClient::from_config(&config.provider)?;
//! let driver = RetryingDriver::new(client, RetryPolicy::from(&config.retry));
//! let acquirer = Acquirer::new(driver, config.provider.system_prompt.clone());
//!
//! let text = acquirer.acquire("Suggest one street food stop", 150).await;
//! println!("{text}");
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! [`WanderlustDriver`]: wanderlust_interface::WanderlustDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod acquirer;
mod retry;

#[cfg(feature = "mistral")]
mod mistral;

pub use acquirer::Acquirer;
pub use retry::{RetryPolicy, RetryingDriver, retry_with_policy};

#[cfg(feature = "mistral")]
pub use mistral::MistralClient;
