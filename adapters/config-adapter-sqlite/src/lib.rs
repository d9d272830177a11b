//! SQLite-backed configuration and media adapter for Sitekit

use std::{fmt::Debug, path::Path};

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use sitekit::{config_adapter, media_adapter, prelude::*};

mod media;
mod schema;
mod setting;

use schema::init_db;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> SkResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl config_adapter::ConfigAdapter for ConfigAdapterSqlite {
	async fn read_value(&self, name: &str) -> SkResult<Option<serde_json::Value>> {
		setting::read(&self.db, name).await
	}

	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> SkResult<()> {
		setting::update(&self.db, name, value).await
	}

	async fn list_values(
		&self,
		prefix: Option<&str>,
	) -> SkResult<std::collections::HashMap<String, serde_json::Value>> {
		setting::list(&self.db, prefix).await
	}
}

#[async_trait]
impl media_adapter::MediaAdapter for ConfigAdapterSqlite {
	async fn read_media(&self, media_id: MediaId) -> SkResult<media_adapter::MediaRecord> {
		media::read(&self.db, media_id).await
	}

	async fn read_media_by_name(&self, name: &str) -> SkResult<media_adapter::MediaRecord> {
		media::read_by_name(&self.db, name).await
	}

	async fn create_media(&self, name: &str, uri: &str) -> SkResult<MediaId> {
		media::create(&self.db, name, uri).await
	}
}

// vim: ts=4
