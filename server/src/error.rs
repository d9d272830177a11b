use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::types::FieldError;

pub type SkResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	Validation(Vec<FieldError>),
	Misconfigured(Box<str>),
	UnsupportedScheme(Box<str>),
	DbError,
	Parse,

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<axum::http::Error> for Error {
	fn from(_: axum::http::Error) -> Self {
		Self::Parse
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Validation(errors) => write!(f, "validation failed ({} errors)", errors.len()),
			Error::Misconfigured(what) => write!(f, "misconfigured: {}", what),
			Error::UnsupportedScheme(scheme) => write!(f, "unsupported scheme: {}", scheme),
			Error::DbError => write!(f, "database error"),
			Error::Parse => write!(f, "parse error"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (
				StatusCode::NOT_FOUND,
				Json(json!({ "status": "error", "message": "not found" })),
			)
				.into_response(),
			Error::Validation(errors) => (
				StatusCode::BAD_REQUEST,
				Json(json!({ "status": "error", "errors": errors })),
			)
				.into_response(),
			err => {
				tracing::warn!("internal error: {}", err);
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					Json(json!({ "status": "error", "message": "internal error" })),
				)
					.into_response()
			}
		}
	}
}

// vim: ts=4
