//! Store statistics reports.

use printful_core::{routes::reports as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RemoteError;
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub store_statistics: Vec<Value>,
    pub error: RemoteError,
}

pub struct ReportsApi<'a> {
    executor: &'a Executor,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Store statistics between two `YYYY-MM-DD` dates. `report_types` are
    /// sent comma-separated, e.g. `["sales_and_costs", "profit"]`.
    pub async fn get_statistics(
        &self,
        report_types: &[&str],
        date_from: &str,
        date_to: &str,
        currency: Option<&str>,
    ) -> Result<Statistics, Error> {
        let query = Query::new()
            .push("report_types", report_types.join(","))
            .push("date_from", date_from)
            .push("date_to", date_to)
            .push_non_empty("currency", currency);
        self.executor.fetch(Call::new(&r::GET_STATISTICS).query(query)).await
    }
}
