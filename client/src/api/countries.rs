//! Country and state codes.

use printful_core::{routes::countries as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

/// Countries with their states; also returned by the tax country list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countries {
    pub countries: Vec<Value>,
    pub error: RemoteError,
}

pub struct CountriesApi<'a> {
    executor: &'a Executor,
}

impl<'a> CountriesApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_countries(&self) -> Result<Countries, Error> {
        self.executor.fetch(Call::new(&r::GET_COUNTRIES)).await
    }
}
