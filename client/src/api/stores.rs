//! Stores reachable with the configured token, and packing slip settings.

use printful_core::{routes::stores as r, Call};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stores {
    pub stores: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub store: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingSlip {
    pub packing_slip: Value,
    pub error: RemoteError,
}

pub struct StoresApi<'a> {
    executor: &'a Executor,
}

impl<'a> StoresApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_stores(&self) -> Result<Stores, Error> {
        self.executor.fetch(Call::new(&r::GET_STORES)).await
    }

    pub async fn get_store(&self, id: u64) -> Result<StoreInfo, Error> {
        self.executor.fetch(Call::new(&r::GET_STORE).id(id)).await
    }

    pub async fn change_packing_slip<B: Serialize + ?Sized>(&self, slip: &B) -> Result<PackingSlip, Error> {
        let call = Call::new(&r::CHANGE_PACKING_SLIP).json(slip)?;
        self.executor.fetch(call).await
    }
}
