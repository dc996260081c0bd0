//! Sales tax countries and rates.

use printful_core::{routes::tax as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::countries::Countries;
use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub tax: Value,
    pub error: RemoteError,
}

pub struct TaxApi<'a> {
    executor: &'a Executor,
}

impl<'a> TaxApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Countries (and states) where sales tax is collected.
    pub async fn get_tax_countries(&self) -> Result<Countries, Error> {
        self.executor.fetch(Call::new(&r::GET_TAX_COUNTRIES)).await
    }

    /// Body: `{recipient: {country_code, state_code, city, zip}}`.
    pub async fn calculate_tax_rate<B: Serialize + ?Sized>(&self, request: &B) -> Result<TaxRate, Error> {
        let call = Call::new(&r::CALCULATE_TAX_RATE).json(request)?;
        self.executor.fetch(call).await
    }
}
