//! Asset store backed by a local public directory

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs::File, io::AsyncReadExt};

use sitekit::{asset_store, prelude::*};

/// Rejects names that would escape the base directory
fn asset_path(base_dir: &Path, file_name: &str) -> SkResult<PathBuf> {
	let name = Path::new(file_name);
	if name.components().any(|c| !matches!(c, Component::Normal(_))) {
		Err(Error::NotFound)?
	}

	Ok(base_dir.join(name))
}

#[derive(Debug)]
pub struct AssetStoreFs {
	base_dir: Box<Path>,
}

impl AssetStoreFs {
	pub async fn new(base_dir: Box<Path>) -> SkResult<Self> {
		tokio::fs::create_dir_all(&base_dir).await?;
		Ok(Self { base_dir })
	}
}

#[async_trait]
impl asset_store::AssetStore for AssetStoreFs {
	async fn read(&self, file_name: &str) -> SkResult<Box<[u8]>> {
		let path = asset_path(&self.base_dir, file_name)?;
		let mut file = File::open(&path).await.map_err(|_| Error::NotFound)?;
		let mut buf: Vec<u8> = Vec::new();
		file.read_to_end(&mut buf).await.map_err(|_| Error::NotFound)?;

		Ok(buf.into_boxed_slice())
	}
}


// vim: ts=4
