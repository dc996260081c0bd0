//! Products stocked in Printful warehouses.

use printful_core::{routes::warehouse as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseProducts {
    pub products: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseProduct {
    pub product: Value,
    pub error: RemoteError,
}

pub struct WarehouseApi<'a> {
    executor: &'a Executor,
}

impl<'a> WarehouseApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_warehouse_products(
        &self,
        query: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<WarehouseProducts, Error> {
        let call = Call::new(&r::GET_WAREHOUSE_PRODUCTS)
            .query(Query::new().push_non_empty("query", query))
            .paging(offset, limit);
        self.executor.fetch(call).await
    }

    pub async fn get_warehouse_product(&self, id: u64) -> Result<WarehouseProduct, Error> {
        self.executor.fetch(Call::new(&r::GET_WAREHOUSE_PRODUCT).id(id)).await
    }
}
