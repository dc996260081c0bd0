//! Sync products of a manual-order / API store.

use printful_core::{routes::products as r, Call, Query, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncProducts {
    pub products: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

/// A sync product together with its variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncProductInfo {
    pub sync_product: Value,
    pub sync_variants: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncProductResult {
    pub sync_product: Value,
    pub error: RemoteError,
}

/// `sync_variant` is `{}` on failure, except for deletion where it is
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncVariantResult {
    pub sync_variant: Value,
    pub error: RemoteError,
}

pub struct ProductsApi<'a> {
    executor: &'a Executor,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List sync products. An empty or absent `search` is not sent.
    pub async fn get_sync_products(
        &self,
        offset: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<SyncProducts, Error> {
        let call = Call::new(&r::GET_SYNC_PRODUCTS)
            .query(Query::new().push_non_empty("search", search))
            .paging(offset, limit);
        self.executor.fetch(call).await
    }

    pub async fn create_sync_product<B: Serialize + ?Sized>(
        &self,
        product: &B,
    ) -> Result<SyncProductResult, Error> {
        let call = Call::new(&r::CREATE_SYNC_PRODUCT).json(product)?;
        self.executor.fetch(call).await
    }

    pub async fn get_sync_product(&self, id: impl Into<ResourceId>) -> Result<SyncProductInfo, Error> {
        self.executor.fetch(Call::new(&r::GET_SYNC_PRODUCT).id(id)).await
    }

    pub async fn modify_sync_product<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        product: &B,
    ) -> Result<SyncProductResult, Error> {
        let call = Call::new(&r::MODIFY_SYNC_PRODUCT).id(id).json(product)?;
        self.executor.fetch(call).await
    }

    /// Delete a sync product and all of its variants.
    pub async fn delete_sync_product(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<SyncProductInfo, Error> {
        self.executor.fetch(Call::new(&r::DELETE_SYNC_PRODUCT).id(id)).await
    }

    pub async fn create_sync_variant<B: Serialize + ?Sized>(
        &self,
        product_id: impl Into<ResourceId>,
        variant: &B,
    ) -> Result<SyncVariantResult, Error> {
        let call = Call::new(&r::CREATE_SYNC_VARIANT).id(product_id).json(variant)?;
        self.executor.fetch(call).await
    }

    pub async fn get_sync_variant(&self, id: impl Into<ResourceId>) -> Result<SyncVariantResult, Error> {
        self.executor.fetch(Call::new(&r::GET_SYNC_VARIANT).id(id)).await
    }

    pub async fn modify_sync_variant<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        variant: &B,
    ) -> Result<SyncVariantResult, Error> {
        let call = Call::new(&r::MODIFY_SYNC_VARIANT).id(id).json(variant)?;
        self.executor.fetch(call).await
    }

    pub async fn delete_sync_variant(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<SyncVariantResult, Error> {
        self.executor.fetch(Call::new(&r::DELETE_SYNC_VARIANT).id(id)).await
    }
}
