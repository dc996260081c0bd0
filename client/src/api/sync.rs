//! Products synced from an ecommerce platform (Shopify, WooCommerce, ...).
//!
//! Unlike `products`, these stores own their catalog; Printful only tracks
//! which platform variants map to which blank variants.

use printful_core::{routes::sync as r, Call, Query, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::products::SyncProductInfo;
use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSyncProducts {
    pub products: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSyncVariant {
    pub sync_variant: Value,
    pub sync_product: Value,
    pub error: RemoteError,
}

pub struct SyncApi<'a> {
    executor: &'a Executor,
}

impl<'a> SyncApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// `status` is `synced`, `unsynced` or `all`.
    pub async fn get_sync_products(
        &self,
        status: Option<&str>,
        search: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<PlatformSyncProducts, Error> {
        let call = Call::new(&r::GET_PLATFORM_SYNC_PRODUCTS)
            .query(
                Query::new()
                    .push_non_empty("status", status)
                    .push_non_empty("search", search),
            )
            .paging(offset, limit);
        self.executor.fetch(call).await
    }

    pub async fn get_sync_product(&self, id: impl Into<ResourceId>) -> Result<SyncProductInfo, Error> {
        self.executor.fetch(Call::new(&r::GET_PLATFORM_SYNC_PRODUCT).id(id)).await
    }

    /// Unlink a product from Printful; the platform product is untouched.
    pub async fn delete_sync_product(&self, id: impl Into<ResourceId>) -> Result<SyncProductInfo, Error> {
        self.executor.fetch(Call::new(&r::DELETE_PLATFORM_SYNC_PRODUCT).id(id)).await
    }

    pub async fn get_sync_variant(&self, id: impl Into<ResourceId>) -> Result<PlatformSyncVariant, Error> {
        self.executor.fetch(Call::new(&r::GET_PLATFORM_SYNC_VARIANT).id(id)).await
    }

    pub async fn modify_sync_variant<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        variant: &B,
    ) -> Result<PlatformSyncVariant, Error> {
        let call = Call::new(&r::MODIFY_PLATFORM_SYNC_VARIANT).id(id).json(variant)?;
        self.executor.fetch(call).await
    }

    pub async fn delete_sync_variant(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<PlatformSyncVariant, Error> {
        self.executor.fetch(Call::new(&r::DELETE_PLATFORM_SYNC_VARIANT).id(id)).await
    }
}
