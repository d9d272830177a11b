use axum::{
	body::Body,
	extract::{Path, State},
	http::header,
	response::Response,
};

use crate::asset::mime;
use crate::asset_store::AssetStore;
use crate::prelude::*;

async fn serve_asset(store: &dyn AssetStore, file_name: &str) -> SkResult<Response<Body>> {
	let bytes = store.read(file_name).await?;
	if bytes.is_empty() {
		return Err(Error::NotFound);
	}

	let response = Response::builder()
		.header(header::CONTENT_TYPE, mime::content_type_for(file_name))
		.header(header::CONTENT_LENGTH, bytes.len())
		.header(header::CONTENT_DISPOSITION, format!("inline; filename=\"{}\"", file_name))
		.body(Body::from(bytes.into_vec()))?;

	Ok(response)
}

/// GET /icon/{file_name}
pub async fn get_icon_file(
	State(app): State<App>,
	Path(file_name): Path<Box<str>>,
) -> SkResult<Response<Body>> {
	debug!("Serving icon {}", file_name);
	serve_asset(&*app.icon_store, &file_name).await
}

/// GET /font/{file_name}
pub async fn get_font_file(
	State(app): State<App>,
	Path(file_name): Path<Box<str>>,
) -> SkResult<Response<Body>> {
	debug!("Serving font {}", file_name);
	serve_asset(&*app.font_store, &file_name).await
}

// vim: ts=4
