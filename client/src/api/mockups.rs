//! Mockup generator.
//!
//! Generation is asynchronous on the remote side: `create_mockup_task`
//! returns a `task_key`, which is then polled with `get_mockup_task`. The
//! client does not poll by itself.

use printful_core::{routes::mockups as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockupTask {
    pub task: Value,
    pub error: RemoteError,
}

impl MockupTask {
    pub fn task_key(&self) -> Option<&str> {
        self.task.get("task_key").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Printfiles {
    pub printfiles: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplates {
    pub templates: Value,
    pub error: RemoteError,
}

pub struct MockupsApi<'a> {
    executor: &'a Executor,
}

impl<'a> MockupsApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn create_mockup_task<B: Serialize + ?Sized>(
        &self,
        product_id: u64,
        request: &B,
    ) -> Result<MockupTask, Error> {
        let call = Call::new(&r::CREATE_MOCKUP_TASK).id(product_id).json(request)?;
        self.executor.fetch(call).await
    }

    pub async fn get_mockup_task(&self, task_key: &str) -> Result<MockupTask, Error> {
        let call = Call::new(&r::GET_MOCKUP_TASK).query(Query::new().push("task_key", task_key));
        self.executor.fetch(call).await
    }

    pub async fn get_printfiles(
        &self,
        product_id: u64,
        orientation: Option<&str>,
        technique: Option<&str>,
    ) -> Result<Printfiles, Error> {
        let call = Call::new(&r::GET_PRINTFILES)
            .id(product_id)
            .query(variant_filters(orientation, technique));
        self.executor.fetch(call).await
    }

    pub async fn get_layout_templates(
        &self,
        product_id: u64,
        orientation: Option<&str>,
        technique: Option<&str>,
    ) -> Result<LayoutTemplates, Error> {
        let call = Call::new(&r::GET_LAYOUT_TEMPLATES)
            .id(product_id)
            .query(variant_filters(orientation, technique));
        self.executor.fetch(call).await
    }
}

fn variant_filters(orientation: Option<&str>, technique: Option<&str>) -> Query {
    Query::new()
        .push_non_empty("orientation", orientation)
        .push_non_empty("technique", technique)
}
