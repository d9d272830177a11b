//! Maps stored asset references to public, fetchable URLs
//!
//! A reference is either a managed media id or a raw storage URI with an
//! explicit scheme. The resolver only composes URLs; fetching bytes is the
//! job of the file-serving endpoints.

use crate::core::app::ObjectStoreConfig;
use crate::media_adapter::MediaAdapter;
use crate::prelude::*;

/// A stored pointer to an asset: a managed media id or a raw storage URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetRef {
	Media(MediaId),
	Uri(Box<str>),
}

impl AssetRef {
	pub fn media(id: u32) -> Self {
		AssetRef::Media(MediaId(id))
	}

	pub fn uri(uri: impl Into<Box<str>>) -> Self {
		AssetRef::Uri(uri.into())
	}
}

pub struct AssetUrlResolver {
	public_base_url: Box<str>,
	object_store: Option<ObjectStoreConfig>,
}

impl AssetUrlResolver {
	pub fn new(
		public_base_url: impl Into<Box<str>>,
		object_store: Option<ObjectStoreConfig>,
	) -> Self {
		Self { public_base_url: public_base_url.into(), object_store }
	}

	/// Resolves an asset reference to a public URL. Media ids are looked up
	/// through the media adapter first; unknown ids map to `Error::NotFound`.
	pub async fn resolve(&self, media: &dyn MediaAdapter, asset: &AssetRef) -> SkResult<Box<str>> {
		let uri = match asset {
			AssetRef::Media(media_id) => media.read_media(*media_id).await?.uri,
			AssetRef::Uri(uri) => uri.clone(),
		};
		self.resolve_uri(&uri)
	}

	/// Resolves an optional asset reference for display. A media id that no
	/// longer resolves renders as an empty URL instead of failing the whole
	/// payload; backend misconfiguration still fails hard.
	pub async fn display_url(
		&self,
		media: &dyn MediaAdapter,
		media_id: Option<MediaId>,
	) -> SkResult<Box<str>> {
		let Some(media_id) = media_id else {
			return Ok("".into());
		};
		match self.resolve(media, &AssetRef::Media(media_id)).await {
			Ok(url) => Ok(url),
			Err(Error::NotFound) => {
				warn!("Media {} no longer resolves, rendering empty asset url", media_id);
				Ok("".into())
			}
			Err(err) => Err(err),
		}
	}

	/// Resolves a raw storage URI to a public URL
	pub fn resolve_uri(&self, uri: &str) -> SkResult<Box<str>> {
		if let Some(path) = uri.strip_prefix("local:") {
			let path = urlencoding::decode(path).map_err(|_| Error::Parse)?;
			let base = self.public_base_url.trim_end_matches('/');
			Ok(format!("{}/{}", base, path).into())
		} else if let Some(path) = uri.strip_prefix("object-store:") {
			let store = self
				.object_store
				.as_ref()
				.ok_or_else(|| Error::Misconfigured("object store".into()))?;
			if store.bucket.is_empty() {
				return Err(Error::Misconfigured("object store bucket".into()));
			}
			let mut url = format!("https://{}.{}", store.bucket, store.storage_domain);
			if !store.prefix.is_empty() {
				url.push('/');
				url.push_str(&store.prefix);
			}
			url.push('/');
			url.push_str(path);
			Ok(url.into())
		} else {
			let scheme = uri.split(':').next().unwrap_or_default();
			Err(Error::UnsupportedScheme(scheme.into()))
		}
	}
}


// vim: ts=4
