//! Printful's product catalog: blank products, variants and categories.

use printful_core::{routes::catalog as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Products {
    pub products: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInfo {
    pub variant: Value,
    pub product: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product: Value,
    pub variants: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub categories: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeGuide {
    pub size_tables: Vec<Value>,
    pub error: RemoteError,
}

pub struct CatalogApi<'a> {
    executor: &'a Executor,
}

impl<'a> CatalogApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_products(&self, category_id: Option<u64>) -> Result<Products, Error> {
        let call = Call::new(&r::GET_PRODUCTS).query(Query::new().push_opt("category_id", category_id));
        self.executor.fetch(call).await
    }

    pub async fn get_variant(&self, id: u64) -> Result<VariantInfo, Error> {
        self.executor.fetch(Call::new(&r::GET_VARIANT).id(id)).await
    }

    pub async fn get_product(&self, id: u64) -> Result<ProductInfo, Error> {
        self.executor.fetch(Call::new(&r::GET_PRODUCT).id(id)).await
    }

    pub async fn get_categories(&self) -> Result<Categories, Error> {
        self.executor.fetch(Call::new(&r::GET_CATEGORIES)).await
    }

    pub async fn get_category(&self, id: u64) -> Result<Category, Error> {
        self.executor.fetch(Call::new(&r::GET_CATEGORY).id(id)).await
    }

    /// `unit` is `inches` or `cm`; the remote service returns both when
    /// omitted.
    pub async fn get_product_size_guide(&self, id: u64, unit: Option<&str>) -> Result<SizeGuide, Error> {
        let call = Call::new(&r::GET_PRODUCT_SIZE_GUIDE)
            .id(id)
            .query(Query::new().push_non_empty("unit", unit));
        self.executor.fetch(call).await
    }
}
