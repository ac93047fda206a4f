#![cfg(feature = "api")]

// Live calls against the configured Mistral endpoint.
// Run with: cargo test -p wanderlust_models --features api

use wanderlust_config::WanderlustConfig;
use wanderlust_interface::WanderlustDriver;
use wanderlust_models::{Acquirer, MistralClient, RetryPolicy, RetryingDriver};

#[tokio::test]
async fn test_live_activity_answer_has_key_value_lines() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = WanderlustConfig::load()?;
    let client = MistralClient::from_config(&config.provider)?;
    assert_eq!(client.provider_name(), "mistral");

    let driver = RetryingDriver::new(client, RetryPolicy::from(&config.retry));
    let acquirer = Acquirer::new(driver, config.provider.system_prompt.clone());

    let text = acquirer
        .acquire(
            "Suggest one food activity near Churchgate. Reply exactly as:\n\
             title: ...\ndescription: ...\ntime_estimate: ...\ndifficulty: ...",
            config.generation.activity_max_tokens,
        )
        .await;

    assert!(text.contains(": "), "unexpected answer: {text}");
    Ok(())
}
