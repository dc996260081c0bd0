//! Webhook configuration of the store.

use printful_core::{routes::webhooks as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

/// Webhook configuration of the store: `{url, types, params}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub webhook: Value,
    pub error: RemoteError,
}

pub struct WebhooksApi<'a> {
    executor: &'a Executor,
}

impl<'a> WebhooksApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_webhooks(&self) -> Result<Webhook, Error> {
        self.executor.fetch(Call::new(&r::GET_WEBHOOKS)).await
    }

    /// Replace the webhook configuration.
    pub async fn set_webhooks<B: Serialize + ?Sized>(&self, config: &B) -> Result<Webhook, Error> {
        let call = Call::new(&r::SET_WEBHOOKS).json(config)?;
        self.executor.fetch(call).await
    }

    pub async fn disable_webhooks(&self) -> Result<Webhook, Error> {
        self.executor.fetch(Call::new(&r::DISABLE_WEBHOOKS)).await
    }
}
