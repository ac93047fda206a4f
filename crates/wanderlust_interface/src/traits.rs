//! Trait definitions for text generation backends.

use async_trait::async_trait;
use std::sync::Arc;
use wanderlust_core::{GenerateRequest, GenerateResponse};
use wanderlust_error::WanderlustResult;

/// Core trait that all text generation backends implement.
#[async_trait]
pub trait WanderlustDriver: Send + Sync {
    /// Generate text for a chat request.
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse>;

    /// Provider name (e.g., "mistral").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "mistral-small-latest").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: WanderlustDriver + ?Sized> WanderlustDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: WanderlustDriver + ?Sized> WanderlustDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
