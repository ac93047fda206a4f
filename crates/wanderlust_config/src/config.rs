//! Configuration structures and loading.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from wanderlust.toml)
//! - User overrides (~/.config/wanderlust/wanderlust.toml, then ./wanderlust.toml)
//! - Environment overrides (`WANDERLUST__RETRY__MAX_ATTEMPTS=5`)
//!
//! Later sources take precedence over earlier ones.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wanderlust_error::{ConfigError, WanderlustError, WanderlustResult};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../wanderlust.toml");

/// Chat-completions provider settings.
///
/// ```toml
/// [provider]
/// base_url = "https://api.mistral.ai/v1/chat/completions"
/// model = "mistral-small-latest"
/// api_key_env = "MISTRAL_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Full URL of the chat-completions endpoint
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// System prompt sent ahead of every user prompt
    pub system_prompt: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai/v1/chat/completions".to_string(),
            model: "mistral-small-latest".to_string(),
            api_key_env: "MISTRAL_API_KEY".to_string(),
            request_timeout_secs: 60,
            system_prompt: String::new(),
        }
    }
}

/// Bounded exponential backoff around model calls.
///
/// ```toml
/// [retry]
/// max_attempts = 3
/// initial_backoff_ms = 4_000
/// max_backoff_ms = 10_000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Wait before the second attempt; doubles afterwards
    pub initial_backoff_ms: u64,
    /// Upper bound for any single wait
    pub max_backoff_ms: u64,
    /// Randomize each wait
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 4_000,
            max_backoff_ms: 10_000,
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// Checks that the policy can make at least one attempt and that the
    /// backoff bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first violated bound.
    pub fn validate(&self) -> WanderlustResult<()> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("retry.max_attempts must be at least 1").into());
        }
        if self.initial_backoff_ms > self.max_backoff_ms {
            return Err(ConfigError::new(format!(
                "retry.initial_backoff_ms ({}) exceeds retry.max_backoff_ms ({})",
                self.initial_backoff_ms, self.max_backoff_ms
            ))
            .into());
        }
        Ok(())
    }
}

/// Prompt parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Place every suggestion is anchored to
    pub location: String,
    /// Token budget for a single activity
    pub activity_max_tokens: u32,
    /// Token budget for a quest
    pub quest_max_tokens: u32,
    /// Token budget for a challenge
    pub challenge_max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            location: "Churchgate, Mumbai".to_string(),
            activity_max_tokens: 150,
            quest_max_tokens: 300,
            challenge_max_tokens: 400,
        }
    }
}

/// Initial session values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name shown on the profile before the user picks one
    pub username: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: "Wanderer".to_string(),
        }
    }
}

/// Top-level Wanderlust configuration.
///
/// # Example
///
/// ```no_run
/// use wanderlust_config::WanderlustConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WanderlustConfig::load()?;
/// println!("Suggesting activities around {}", config.generation.location);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct WanderlustConfig {
    /// Model provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Retry policy for model calls
    #[serde(default)]
    pub retry: RetryConfig,
    /// Prompt parameters
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Session defaults
    #[serde(default)]
    pub session: SessionConfig,
}

impl WanderlustConfig {
    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a present source cannot be parsed or the
    /// merged result fails validation.
    #[instrument]
    pub fn load() -> WanderlustResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/wanderlust/wanderlust.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("wanderlust").required(false))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by one explicit file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> WanderlustResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::bundled()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the document is malformed.
    pub fn from_toml_str(toml: &str) -> WanderlustResult<Self> {
        let builder = Self::bundled().add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the offending setting.
    pub fn validate(&self) -> WanderlustResult<()> {
        self.retry.validate()?;
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::new("provider.base_url cannot be empty").into());
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::new("provider.model cannot be empty").into());
        }
        Ok(())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn environment() -> Environment {
        Environment::with_prefix("WANDERLUST")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> WanderlustResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                WanderlustError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                WanderlustError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }
}
