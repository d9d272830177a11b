//! Settings key-value store management
//!
//! Handles persistent storage of configuration objects as JSON values.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use sitekit::prelude::*;

use crate::inspect;

/// List all settings or filter by key prefix
pub(crate) async fn list(
	db: &SqlitePool,
	prefix: Option<&str>,
) -> SkResult<HashMap<String, serde_json::Value>> {
	let rows = if let Some(prefix) = prefix {
		sqlx::query("SELECT name, value FROM settings WHERE name LIKE ? || '%'")
			.bind(prefix)
			.fetch_all(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?
	} else {
		sqlx::query("SELECT name, value FROM settings")
			.fetch_all(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?
	};

	let mut settings = HashMap::new();
	for row in rows {
		let name: String = row.get("name");
		let value: Option<String> = row.get("value");
		settings.insert(
			name,
			value.and_then(|v| serde_json::from_str(&v).ok()).unwrap_or(serde_json::Value::Null),
		);
	}

	Ok(settings)
}

/// Read a single setting by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> SkResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Update or create a setting. Last write wins, no version check.
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> SkResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query("INSERT OR REPLACE INTO settings (name, value) VALUES (?, ?)")
			.bind(name)
			.bind(value_str)
			.execute(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	} else {
		// Delete setting if value is None
		sqlx::query("DELETE FROM settings WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
