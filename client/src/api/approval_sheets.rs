//! Design approval sheets for orders placed on hold.

use printful_core::{routes::approval_sheets as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::orders::OrderResult;
use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalSheets {
    pub sheets: Vec<Value>,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalSheet {
    pub sheet: Value,
    pub error: RemoteError,
}

pub struct ApprovalSheetsApi<'a> {
    executor: &'a Executor,
}

impl<'a> ApprovalSheetsApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_approval_sheets(&self) -> Result<ApprovalSheets, Error> {
        self.executor.fetch(Call::new(&r::GET_APPROVAL_SHEETS)).await
    }

    pub async fn approve_design(&self, confirm_hash: &str) -> Result<ApprovalSheet, Error> {
        let call = Call::new(&r::APPROVE_DESIGN)
            .query(Query::new().push("confirm_hash", confirm_hash))
            .json(&json!({ "status": "approved" }))?;
        self.executor.fetch(call).await
    }

    /// Ask for design changes; `files` are replacement `{type, url}`
    /// entries.
    pub async fn submit_changes_to_design(
        &self,
        confirm_hash: &str,
        message: &str,
        files: &[Value],
    ) -> Result<OrderResult, Error> {
        let call = Call::new(&r::SUBMIT_CHANGES_TO_DESIGN)
            .query(Query::new().push("confirm_hash", confirm_hash))
            .json(&json!({ "message": message, "files": files }))?;
        self.executor.fetch(call).await
    }
}
