use std::{env, path, sync::Arc};

use sitekit::asset_store::AssetStore;
use sitekit::{AppBuilder, ObjectStoreConfig};
use sitekit_asset_store_fs::AssetStoreFs;
use sitekit_asset_store_s3::AssetStoreS3;
use sitekit_config_adapter_sqlite::ConfigAdapterSqlite;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub asset_dir: path::PathBuf,
	pub listen: String,
	pub public_base_url: String,
	pub object_store: Option<ObjectStoreConfig>,
}

fn read_config() -> Config {
	let object_store = env::var("OBJECT_STORE_BUCKET").ok().map(|bucket| ObjectStoreConfig {
		bucket: bucket.into(),
		prefix: env::var("OBJECT_STORE_PREFIX").unwrap_or_default().into(),
		storage_domain: env::var("OBJECT_STORE_DOMAIN")
			.unwrap_or("s3.amazonaws.com".to_string())
			.into(),
	});

	Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		asset_dir: path::PathBuf::from(env::var("ASSET_DIR").unwrap_or("./public".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
		public_base_url: env::var("PUBLIC_BASE_URL")
			.unwrap_or("http://127.0.0.1:8080".to_string()),
		object_store,
	}
}

#[tokio::main]
async fn main() {
	let config = read_config();

	tokio::fs::create_dir_all(&config.db_dir).await.unwrap();
	let config_adapter =
		Arc::new(ConfigAdapterSqlite::new(config.db_dir.join("config.db")).await.unwrap());

	let font_store =
		Arc::new(AssetStoreFs::new(config.asset_dir.join("fonts").into()).await.unwrap());
	let icon_store: Arc<dyn AssetStore> = match &config.object_store {
		Some(store) => Arc::new(AssetStoreS3::new(store).unwrap()),
		None => Arc::new(AssetStoreFs::new(config.asset_dir.join("icons").into()).await.unwrap()),
	};

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.public_base_url(config.public_base_url)
		.config_adapter(config_adapter.clone())
		.media_adapter(config_adapter)
		.icon_store(icon_store)
		.font_store(font_store);
	if let Some(object_store) = config.object_store {
		builder.object_store(object_store);
	}

	builder.run().await.unwrap();
}

// vim: ts=4
