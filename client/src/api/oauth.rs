//! Scopes of the configured token.

use printful_core::{routes::oauth as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scopes {
    pub scopes: Vec<Value>,
    pub error: RemoteError,
}

pub struct OAuthApi<'a> {
    executor: &'a Executor,
}

impl<'a> OAuthApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Scopes granted to the configured token.
    pub async fn get_scopes(&self) -> Result<Scopes, Error> {
        self.executor.fetch(Call::new(&r::GET_SCOPES)).await
    }
}
