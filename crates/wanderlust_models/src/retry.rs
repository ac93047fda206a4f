//! Bounded exponential backoff around fallible async operations.

use async_trait::async_trait;
use derive_getters::Getters;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};
use wanderlust_config::RetryConfig;
use wanderlust_core::{GenerateRequest, GenerateResponse};
use wanderlust_error::{RetryableError, WanderlustResult};
use wanderlust_interface::WanderlustDriver;

/// How often and how patiently to retry.
///
/// The first retry waits `initial_backoff`, each later one waits twice as
/// long as the previous, never more than `max_backoff`. At most
/// `max_attempts` calls are made in total.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wanderlust_config::RetryConfig;
/// use wanderlust_models::RetryPolicy;
///
/// let policy = RetryPolicy::from(&RetryConfig::default());
/// let delays: Vec<Duration> = policy.delays().collect();
/// assert_eq!(delays, vec![Duration::from_secs(4), Duration::from_secs(8)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    max_attempts: u32,
    /// Wait before the first retry
    initial_backoff: Duration,
    /// Ceiling for any single wait
    max_backoff: Duration,
    /// Randomize each wait
    jitter: bool,
}

impl RetryPolicy {
    /// Creates a policy. `max_attempts` below 1 is raised to 1.
    pub fn new(
        max_attempts: u32,
        initial_backoff: Duration,
        max_backoff: Duration,
        jitter: bool,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff,
            jitter,
        }
    }

    /// A policy that calls exactly once.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO, false)
    }

    /// The waits between consecutive attempts, `max_attempts - 1` of them.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + Send + use<> {
        let apply_jitter = self.jitter;
        let cap = self.max_backoff;
        // Base 2 doubles the wait each time; the factor scales the first one.
        let factor = (self.initial_backoff.as_millis() as u64 / 2).max(1);
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(cap)
            // jitter can stretch a wait by half again, so cap after it too
            .map(move |delay| if apply_jitter { jitter(delay).min(cap) } else { delay })
            .take(self.max_attempts.saturating_sub(1) as usize)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.initial_backoff_ms),
            Duration::from_millis(config.max_backoff_ms),
            config.jitter,
        )
    }
}

/// Run `operation` until it succeeds, fails permanently, or the policy is
/// exhausted.
///
/// Errors for which [`RetryableError::is_retryable`] is false end the loop at
/// once. When every attempt fails transiently, the last error is returned.
///
/// # Errors
///
/// Returns the error of the final attempt.
pub async fn retry_with_policy<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + Display,
{
    let max_attempts = policy.max_attempts;
    let mut attempt = 0u32;

    Retry::spawn(policy.delays(), || {
        attempt += 1;
        let current = attempt;
        let pending = operation();
        async move {
            match pending.await {
                Ok(value) => {
                    if current > 1 {
                        debug!(attempt = current, "Succeeded after retry");
                    }
                    Ok(value)
                }
                Err(e) if e.is_retryable() && current < max_attempts => {
                    warn!(attempt = current, max_attempts, error = %e, "Transient failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) if e.is_retryable() => {
                    warn!(attempt = current, max_attempts, error = %e, "Transient failure, attempts exhausted");
                    Err(RetryError::Permanent(e))
                }
                Err(e) => {
                    warn!(attempt = current, error = %e, "Permanent failure, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}

/// Decorator that retries the wrapped driver's transient failures.
///
/// # Examples
///
/// ```
/// use wanderlust_models::{RetryPolicy, RetryingDriver};
/// # use async_trait::async_trait;
/// # use wanderlust_core::{GenerateRequest, GenerateResponse};
/// # use wanderlust_error::WanderlustResult;
/// # use wanderlust_interface::WanderlustDriver;
/// # struct Echo;
/// # #[async_trait]
/// # impl WanderlustDriver for Echo {
/// #     async fn generate(&self, _req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
/// #         Ok(GenerateResponse::new("title: Echo"))
/// #     }
/// #     fn provider_name(&self) -> &'static str { "echo" }
/// #     fn model_name(&self) -> &str { "echo" }
/// # }
///
/// let driver = RetryingDriver::new(Echo, RetryPolicy::no_retry());
/// assert_eq!(driver.policy().max_attempts(), &1);
/// ```
#[derive(Debug, Clone, Getters)]
pub struct RetryingDriver<D> {
    /// Wrapped driver
    inner: D,
    /// Policy applied to every call
    policy: RetryPolicy,
}

impl<D> RetryingDriver<D> {
    /// Wraps `inner` with `policy`.
    pub fn new(inner: D, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Unwraps the decorated driver.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

#[async_trait]
impl<D: WanderlustDriver> WanderlustDriver for RetryingDriver<D> {
    #[instrument(skip(self, req), fields(provider = self.inner.provider_name(), max_attempts = self.policy.max_attempts))]
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
        retry_with_policy(&self.policy, || self.inner.generate(req)).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
