//! Shipping rate calculation.

use printful_core::{routes::shipping as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub rates: Vec<Value>,
    pub error: RemoteError,
}

pub struct ShippingApi<'a> {
    executor: &'a Executor,
}

impl<'a> ShippingApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Body: `{recipient, items, currency?, locale?}`; see
    /// `models::ShippingRateRequest`.
    pub async fn calculate_shipping_rates<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<ShippingRates, Error> {
        let call = Call::new(&r::CALCULATE_SHIPPING_RATES).json(request)?;
        self.executor.fetch(call).await
    }
}
