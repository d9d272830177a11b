//! Common types used throughout Sitekit.

use serde::{Deserialize, Serialize};

// MediaId //
//*********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MediaId(pub u32);

impl std::fmt::Display for MediaId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for MediaId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_u32(self.0)
	}
}

impl<'de> Deserialize<'de> for MediaId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(MediaId(u32::deserialize(deserializer)?))
	}
}

// FieldError //
//************//

/// A validation failure attached to one field of a form or list record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	pub field: Box<str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<usize>,
	pub message: Box<str>,
}

impl FieldError {
	pub fn new(field: impl Into<Box<str>>, message: impl Into<Box<str>>) -> Self {
		Self { field: field.into(), index: None, message: message.into() }
	}

	pub fn at(index: usize, field: impl Into<Box<str>>, message: impl Into<Box<str>>) -> Self {
		Self { field: field.into(), index: Some(index), message: message.into() }
	}
}

// ApiResponse //
//*************//

/// Standard `{ "status": "success", "data": ... }` envelope used by the
/// public JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	pub status: &'static str,
	pub data: T,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { status: "success", data }
	}
}

// vim: ts=4
