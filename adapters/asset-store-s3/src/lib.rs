//! Asset store fetching from an S3-style object store over HTTPS
//!
//! Files are read through the bucket's public endpoint, composed as
//! `https://{bucket}.{storage_domain}/{prefix}/{file_name}`. Authentication
//! and signed requests are out of scope; buckets are expected to expose the
//! served prefixes publicly.

use async_trait::async_trait;

use sitekit::{ObjectStoreConfig, asset_store, prelude::*};

#[derive(Debug)]
pub struct AssetStoreS3 {
	base_url: Box<str>,
	client: reqwest::Client,
}

impl AssetStoreS3 {
	pub fn new(config: &ObjectStoreConfig) -> SkResult<Self> {
		if config.bucket.is_empty() {
			return Err(Error::Misconfigured("object store bucket".into()));
		}

		let mut base_url = format!("https://{}.{}", config.bucket, config.storage_domain);
		if !config.prefix.is_empty() {
			base_url.push('/');
			base_url.push_str(&config.prefix);
		}

		Ok(Self { base_url: base_url.into(), client: reqwest::Client::new() })
	}
}

#[async_trait]
impl asset_store::AssetStore for AssetStoreS3 {
	async fn read(&self, file_name: &str) -> SkResult<Box<[u8]>> {
		let url = format!("{}/{}", self.base_url, file_name);
		debug!("Fetching {}", url);

		let response = self.client.get(&url).send().await.map_err(|err| {
			warn!("Object store fetch failed: {}", err);
			Error::NotFound
		})?;
		if !response.status().is_success() {
			return Err(Error::NotFound);
		}

		let bytes = response.bytes().await.map_err(|_| Error::NotFound)?;
		Ok(bytes.to_vec().into_boxed_slice())
	}
}


// vim: ts=4
