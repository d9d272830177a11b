//! Media record storage

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use sitekit::{media_adapter::MediaRecord, prelude::*};

use crate::inspect;

fn map_record(row: SqliteRow) -> MediaRecord {
	let media_id: u32 = row.get("media_id");
	let name: String = row.get("name");
	let uri: String = row.get("uri");
	MediaRecord { media_id: MediaId(media_id), name: name.into(), uri: uri.into() }
}

pub(crate) async fn read(db: &SqlitePool, media_id: MediaId) -> SkResult<MediaRecord> {
	let row = sqlx::query("SELECT media_id, name, uri FROM media WHERE media_id = ?")
		.bind(media_id.0)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.map(map_record).ok_or(Error::NotFound)
}

pub(crate) async fn read_by_name(db: &SqlitePool, name: &str) -> SkResult<MediaRecord> {
	let row = sqlx::query("SELECT media_id, name, uri FROM media WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.map(map_record).ok_or(Error::NotFound)
}

pub(crate) async fn create(db: &SqlitePool, name: &str, uri: &str) -> SkResult<MediaId> {
	let row = sqlx::query("INSERT INTO media (name, uri) VALUES (?, ?) RETURNING media_id")
		.bind(name)
		.bind(uri)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let media_id: u32 = row.get("media_id");
	Ok(MediaId(media_id))
}

// vim: ts=4
