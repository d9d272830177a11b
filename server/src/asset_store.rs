//! Adapter that reads raw asset bytes for the file-serving endpoints
use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Byte source behind a file-serving prefix. One blocking read per request;
/// large-file streaming is out of scope.
#[async_trait]
pub trait AssetStore: Debug + Send + Sync {
	/// Reads a file by name. A failed or empty backend read maps to
	/// `Error::NotFound`.
	async fn read(&self, file_name: &str) -> SkResult<Box<[u8]>>;
}

// vim: ts=4
