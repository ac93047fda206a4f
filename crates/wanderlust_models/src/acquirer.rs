//! Prompt in, raw text out.

use derive_getters::Getters;
use tracing::{error, info, instrument, warn};
use wanderlust_core::{GenerateRequest, Message};
use wanderlust_interface::WanderlustDriver;

/// Sends a prompt to a driver and hands back whatever text came out.
///
/// Every failure degrades to the empty string after being logged, so callers
/// only ever deal with text. Wrap the driver in a
/// [`RetryingDriver`](crate::RetryingDriver) to retry transient failures
/// before giving up.
#[derive(Debug, Clone, Getters)]
pub struct Acquirer<D> {
    /// Driver that performs the actual call
    driver: D,
    /// Sent ahead of every prompt; omitted when blank
    system_prompt: String,
}

impl<D: WanderlustDriver> Acquirer<D> {
    /// Creates an acquirer around `driver`.
    pub fn new(driver: D, system_prompt: impl Into<String>) -> Self {
        Self {
            driver,
            system_prompt: system_prompt.into(),
        }
    }

    /// Builds the chat request for `prompt`.
    pub fn request(&self, prompt: &str, max_tokens: u32) -> GenerateRequest {
        let mut messages = Vec::with_capacity(2);
        if !self.system_prompt.trim().is_empty() {
            messages.push(Message::system(self.system_prompt.trim()));
        }
        messages.push(Message::user(prompt));

        GenerateRequest {
            messages,
            max_tokens: Some(max_tokens),
            ..Default::default()
        }
    }

    /// Returns the model's text for `prompt`, or `""` if the call failed.
    #[instrument(skip(self, prompt), fields(provider = self.driver.provider_name(), model = %self.driver.model_name(), prompt_len = prompt.len()))]
    pub async fn acquire(&self, prompt: &str, max_tokens: u32) -> String {
        let request = self.request(prompt, max_tokens);
        match self.driver.generate(&request).await {
            Ok(response) if response.is_empty() => {
                warn!("Model returned no text");
                String::new()
            }
            Ok(response) => {
                info!(chars = response.text.len(), "Acquired model text");
                response.text
            }
            Err(e) => {
                error!(error = %e, "Model call failed, continuing with empty text");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wanderlust_core::{GenerateResponse, Role};
    use wanderlust_error::WanderlustResult;

    struct Silent;

    #[async_trait]
    impl WanderlustDriver for Silent {
        async fn generate(&self, _req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
            Ok(GenerateResponse::default())
        }

        fn provider_name(&self) -> &'static str {
            "silent"
        }

        fn model_name(&self) -> &str {
            "none"
        }
    }

    #[test]
    fn test_request_puts_system_prompt_first() {
        let acquirer = Acquirer::new(Silent, "  You are a Mumbai guide.\n");
        let request = acquirer.request("Suggest a cafe", 150);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "You are a Mumbai guide.");
        assert_eq!(request.messages[1].content, "Suggest a cafe");
        assert_eq!(request.max_tokens, Some(150));
    }

    #[test]
    fn test_blank_system_prompt_is_omitted() {
        let acquirer = Acquirer::new(Silent, "   ");
        let request = acquirer.request("Suggest a cafe", 150);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_empty_response_is_empty_text() {
        let acquirer = Acquirer::new(Silent, "");
        assert_eq!(acquirer.acquire("anything", 10).await, "");
    }
}
