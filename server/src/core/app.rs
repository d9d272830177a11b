//! App state type

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;

use crate::asset::AssetUrlResolver;
use crate::asset_store::AssetStore;
use crate::config_adapter::ConfigAdapter;
use crate::media_adapter::MediaAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend configuration for object-store URL composition
#[derive(Clone, Debug)]
pub struct ObjectStoreConfig {
	pub bucket: Box<str>,
	pub prefix: Box<str>,
	pub storage_domain: Box<str>,
}

#[derive(Debug)]
pub struct AppOpts {
	listen: Box<str>,
	pub public_base_url: Box<str>,
	pub object_store: Option<ObjectStoreConfig>,
}

pub struct AppState {
	pub opts: AppOpts,
	pub resolver: AssetUrlResolver,

	pub config_adapter: Arc<dyn ConfigAdapter>,
	pub media_adapter: Arc<dyn MediaAdapter>,
	pub icon_store: Arc<dyn AssetStore>,
	pub font_store: Arc<dyn AssetStore>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub config_adapter: Option<Arc<dyn ConfigAdapter>>,
	pub media_adapter: Option<Arc<dyn MediaAdapter>>,
	pub icon_store: Option<Arc<dyn AssetStore>>,
	pub font_store: Option<Arc<dyn AssetStore>>,
}

pub struct AppBuilder {
	opts: AppOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppOpts {
				listen: "127.0.0.1:8080".into(),
				public_base_url: "http://127.0.0.1:8080/files/".into(),
				object_store: None,
			},
			adapters: Adapters {
				config_adapter: None,
				media_adapter: None,
				icon_store: None,
				font_store: None,
			},
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn public_base_url(&mut self, public_base_url: impl Into<Box<str>>) -> &mut Self { self.opts.public_base_url = public_base_url.into(); self }
	pub fn object_store(&mut self, object_store: ObjectStoreConfig) -> &mut Self { self.opts.object_store = Some(object_store); self }

	// Adapters
	pub fn config_adapter(&mut self, config_adapter: Arc<dyn ConfigAdapter>) -> &mut Self { self.adapters.config_adapter = Some(config_adapter); self }
	pub fn media_adapter(&mut self, media_adapter: Arc<dyn MediaAdapter>) -> &mut Self { self.adapters.media_adapter = Some(media_adapter); self }
	pub fn icon_store(&mut self, icon_store: Arc<dyn AssetStore>) -> &mut Self { self.adapters.icon_store = Some(icon_store); self }
	pub fn font_store(&mut self, font_store: Arc<dyn AssetStore>) -> &mut Self { self.adapters.font_store = Some(font_store); self }

	/// Assembles the app state. `Error::Misconfigured` if an adapter is missing.
	pub fn build(self) -> SkResult<App> {
		let config_adapter =
			self.adapters.config_adapter.ok_or(Error::Misconfigured("config adapter".into()))?;
		let media_adapter =
			self.adapters.media_adapter.ok_or(Error::Misconfigured("media adapter".into()))?;
		let icon_store =
			self.adapters.icon_store.ok_or(Error::Misconfigured("icon store".into()))?;
		let font_store =
			self.adapters.font_store.ok_or(Error::Misconfigured("font store".into()))?;

		let resolver = AssetUrlResolver::new(
			self.opts.public_base_url.clone(),
			self.opts.object_store.clone(),
		);

		Ok(Arc::new(AppState {
			opts: self.opts,
			resolver,
			config_adapter,
			media_adapter,
			icon_store,
			font_store,
		}))
	}

	pub async fn run(self) -> SkResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Sitekit v{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
