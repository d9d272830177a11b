//! Adapter that resolves managed media identifiers
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// A managed media object: a name plus the storage URI of its file.
/// The URI carries an explicit scheme (`local:` or `object-store:`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediaRecord {
	#[serde(rename = "mediaId")]
	pub media_id: MediaId,
	pub name: Box<str>,
	pub uri: Box<str>,
}

#[async_trait]
pub trait MediaAdapter: Debug + Send + Sync {
	/// Reads a media record by id, `Error::NotFound` if the id is unknown
	async fn read_media(&self, media_id: MediaId) -> SkResult<MediaRecord>;

	/// Reads a media record by its unique name
	async fn read_media_by_name(&self, name: &str) -> SkResult<MediaRecord>;

	/// Registers a media object, returns its id
	async fn create_media(&self, name: &str, uri: &str) -> SkResult<MediaId>;
}

// vim: ts=4
