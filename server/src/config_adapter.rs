//! Adapter that persists named configuration values
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::{collections::HashMap, fmt::Debug};

use crate::prelude::*;

/// Key-value store for configuration objects. Values are JSON documents;
/// each feature module owns one key (e.g. `business_info`, `social_icons`).
/// Saves are last-write-wins, the adapter performs no version checks.
#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Reads a configuration value, `None` if it was never saved
	async fn read_value(&self, name: &str) -> SkResult<Option<serde_json::Value>>;

	/// Updates a configuration value, `None` deletes it
	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> SkResult<()>;

	/// Lists all configuration values, optionally filtered by key prefix
	async fn list_values(&self, prefix: Option<&str>)
	-> SkResult<HashMap<String, serde_json::Value>>;
}

/// Reads a typed configuration object, falling back to its default when unset
pub async fn read_config<T: DeserializeOwned + Default>(
	adapter: &dyn ConfigAdapter,
	name: &str,
) -> SkResult<T> {
	match adapter.read_value(name).await? {
		Some(value) => serde_json::from_value(value).map_err(|err| {
			warn!("Stored config '{}' does not deserialize: {}", name, err);
			Error::Parse
		}),
		None => Ok(T::default()),
	}
}

/// Serializes and persists a typed configuration object
pub async fn write_config<T: Serialize>(
	adapter: &dyn ConfigAdapter,
	name: &str,
	config: &T,
) -> SkResult<()> {
	let value = serde_json::to_value(config).map_err(|_| Error::Parse)?;
	adapter.update_value(name, Some(value)).await
}

// vim: ts=4
