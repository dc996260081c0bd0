//! Orders.
//!
//! `confirm` and `update_existing` are always sent explicitly, `false`
//! included; the remote defaults are not relied upon.

use printful_core::{routes::orders as r, Call, Query, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orders {
    pub orders: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCosts {
    pub costs: Value,
    pub retail_costs: Value,
    pub error: RemoteError,
}

pub struct OrdersApi<'a> {
    executor: &'a Executor,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List orders, optionally filtered by status (`draft`, `pending`, ...).
    pub async fn get_orders(
        &self,
        status: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Orders, Error> {
        let call = Call::new(&r::GET_ORDERS)
            .query(Query::new().push_non_empty("status", status))
            .paging(offset, limit);
        self.executor.fetch(call).await
    }

    /// Create an order. With `update_existing`, an order carrying the same
    /// `external_id` is overwritten instead of rejected.
    pub async fn create_order<B: Serialize + ?Sized>(
        &self,
        order: &B,
        confirm: bool,
        update_existing: bool,
    ) -> Result<OrderResult, Error> {
        let call = Call::new(&r::CREATE_ORDER)
            .query(
                Query::new()
                    .push("confirm", confirm)
                    .push("update_existing", update_existing),
            )
            .json(order)?;
        self.executor.fetch(call).await
    }

    pub async fn get_order(&self, id: impl Into<ResourceId>) -> Result<OrderResult, Error> {
        self.executor.fetch(Call::new(&r::GET_ORDER).id(id)).await
    }

    /// Cancel a draft or pending order.
    pub async fn cancel_order(&self, id: impl Into<ResourceId>) -> Result<OrderResult, Error> {
        self.executor.fetch(Call::new(&r::CANCEL_ORDER).id(id)).await
    }

    pub async fn update_order<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        order: &B,
        confirm: bool,
    ) -> Result<OrderResult, Error> {
        let call = Call::new(&r::UPDATE_ORDER)
            .id(id)
            .query(Query::new().push("confirm", confirm))
            .json(order)?;
        self.executor.fetch(call).await
    }

    pub async fn confirm_order(&self, id: impl Into<ResourceId>) -> Result<OrderResult, Error> {
        self.executor.fetch(Call::new(&r::CONFIRM_ORDER).id(id)).await
    }

    pub async fn estimate_order_costs<B: Serialize + ?Sized>(
        &self,
        order: &B,
    ) -> Result<OrderCosts, Error> {
        let call = Call::new(&r::ESTIMATE_ORDER_COSTS).json(order)?;
        self.executor.fetch(call).await
    }
}
