//! File library.

use printful_core::{routes::files as r, Call, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{PageInfo, RemoteError};
use crate::{Error, Executor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Files {
    pub files: Vec<Value>,
    pub paging: PageInfo,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub file: Value,
    pub error: RemoteError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadColors {
    pub thread_colors: Vec<Value>,
    pub error: RemoteError,
}

pub struct FilesApi<'a> {
    executor: &'a Executor,
}

impl<'a> FilesApi<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn get_files(&self, status: Option<&str>, offset: u64, limit: u64) -> Result<Files, Error> {
        let call = Call::new(&r::GET_FILES)
            .query(Query::new().push_non_empty("status", status))
            .paging(offset, limit);
        self.executor.fetch(call).await
    }

    /// Register a file by URL; the remote service downloads it
    /// asynchronously.
    pub async fn add_file<B: Serialize + ?Sized>(&self, file: &B) -> Result<FileResult, Error> {
        let call = Call::new(&r::ADD_FILE).json(file)?;
        self.executor.fetch(call).await
    }

    pub async fn get_file(&self, id: u64) -> Result<FileResult, Error> {
        self.executor.fetch(Call::new(&r::GET_FILE).id(id)).await
    }

    /// Suggested embroidery thread colors for an image.
    pub async fn get_thread_colors(&self, file_url: &str) -> Result<ThreadColors, Error> {
        let call = Call::new(&r::GET_THREAD_COLORS).json(&json!({ "file_url": file_url }))?;
        self.executor.fetch(call).await
    }
}
