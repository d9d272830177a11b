//! In-memory adapters for integration tests
//!
//! These back the feature flows with plain maps so tests exercise the
//! server logic without a database or filesystem.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use sitekit::asset_store::AssetStore;
use sitekit::config_adapter::ConfigAdapter;
use sitekit::media_adapter::{MediaAdapter, MediaRecord};
use sitekit::prelude::*;

#[derive(Debug, Default)]
pub struct MemoryConfigAdapter {
	values: Mutex<HashMap<String, serde_json::Value>>,
}

#[async_trait]
impl ConfigAdapter for MemoryConfigAdapter {
	async fn read_value(&self, name: &str) -> SkResult<Option<serde_json::Value>> {
		Ok(self.values.lock().unwrap().get(name).cloned())
	}

	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> SkResult<()> {
		let mut values = self.values.lock().unwrap();
		match value {
			Some(value) => values.insert(name.to_string(), value),
			None => values.remove(name),
		};
		Ok(())
	}

	async fn list_values(
		&self,
		prefix: Option<&str>,
	) -> SkResult<HashMap<String, serde_json::Value>> {
		let values = self.values.lock().unwrap();
		Ok(values
			.iter()
			.filter(|(name, _)| prefix.is_none_or(|prefix| name.starts_with(prefix)))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect())
	}
}

#[derive(Debug, Default)]
pub struct MemoryMediaAdapter {
	records: Mutex<Vec<MediaRecord>>,
}

impl MemoryMediaAdapter {
	/// Seeds media records with ids 1..=n in the given order
	pub fn with_media(uris: &[(&str, &str)]) -> Self {
		let records = uris
			.iter()
			.enumerate()
			.map(|(i, (name, uri))| MediaRecord {
				media_id: MediaId(i as u32 + 1),
				name: (*name).into(),
				uri: (*uri).into(),
			})
			.collect();
		Self { records: Mutex::new(records) }
	}
}

#[async_trait]
impl MediaAdapter for MemoryMediaAdapter {
	async fn read_media(&self, media_id: MediaId) -> SkResult<MediaRecord> {
		let records = self.records.lock().unwrap();
		records.iter().find(|r| r.media_id == media_id).cloned().ok_or(Error::NotFound)
	}

	async fn read_media_by_name(&self, name: &str) -> SkResult<MediaRecord> {
		let records = self.records.lock().unwrap();
		records.iter().find(|r| &*r.name == name).cloned().ok_or(Error::NotFound)
	}

	async fn create_media(&self, name: &str, uri: &str) -> SkResult<MediaId> {
		let mut records = self.records.lock().unwrap();
		let media_id = MediaId(records.len() as u32 + 1);
		records.push(MediaRecord { media_id, name: name.into(), uri: uri.into() });
		Ok(media_id)
	}
}

#[derive(Debug, Default)]
pub struct MemoryAssetStore {
	files: Mutex<HashMap<String, Box<[u8]>>>,
}

impl MemoryAssetStore {
	pub fn insert(&self, file_name: &str, bytes: &[u8]) {
		self.files.lock().unwrap().insert(file_name.to_string(), bytes.into());
	}
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
	async fn read(&self, file_name: &str) -> SkResult<Box<[u8]>> {
		self.files.lock().unwrap().get(file_name).cloned().ok_or(Error::NotFound)
	}
}
