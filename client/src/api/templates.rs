//! Product templates saved from the design maker.

use printful_core::{routes::templates as r, Call, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplates {
    pub templates: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub template: Value,
    pub error: RemoteError,
}

/// `success` is `null` when the deletion failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedTemplate {
    pub success: Value,
    pub error: RemoteError,
}

pub struct TemplatesApi<'a> {
    executor: &'a Executor,
}

impl<'a> TemplatesApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_product_templates(&self, offset: u64, limit: u64) -> Result<ProductTemplates, Error> {
        let call = Call::new(&r::GET_PRODUCT_TEMPLATES).paging(offset, limit);
        self.executor.fetch(call).await
    }

    /// `id` is a template id or `@<external_product_id>`.
    pub async fn get_product_template(&self, id: impl Into<ResourceId>) -> Result<ProductTemplate, Error> {
        self.executor.fetch(Call::new(&r::GET_PRODUCT_TEMPLATE).id(id)).await
    }

    pub async fn delete_product_template(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<DeletedTemplate, Error> {
        self.executor.fetch(Call::new(&r::DELETE_PRODUCT_TEMPLATE).id(id)).await
    }
}
