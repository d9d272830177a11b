//! Icon list record types and their field validation rules

use regex::Regex;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::prelude::*;

/// One structured entry of a repeatable list. Position in the list is the
/// display order; records carry no stable identity of their own.
pub trait ListRecord:
	Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
	/// Editable field names, in display order
	const FIELDS: &'static [&'static str];

	/// Name of the asset reference field
	const MEDIA_FIELD: &'static str = "mediaId";

	/// Sets one field from a submitted JSON value
	fn set_field(&mut self, field: &str, value: &serde_json::Value) -> Result<(), Box<str>>;

	/// Validates one field, returns an error message if it is invalid
	fn validate_field(&self, field: &str) -> Option<Box<str>>;

	/// The record's asset reference, if one is set
	fn media_id(&self) -> Option<MediaId>;

	/// Validates all fields of the record
	fn validate(&self, index: usize) -> Vec<FieldError> {
		Self::FIELDS
			.iter()
			.filter_map(|field| {
				self.validate_field(field).map(|message| FieldError::at(index, *field, message))
			})
			.collect()
	}
}

/// Alphanumeric plus spaces, used for platform and merchant names
fn valid_name(value: &str) -> bool {
	Regex::new(r"^[A-Za-z0-9 ]+$").map(|re| re.is_match(value)).unwrap_or(false)
}

fn validate_name(value: &str) -> Option<Box<str>> {
	if value.is_empty() {
		Some("This field is required".into())
	} else if value.len() > 50 {
		Some("Must be at most 50 characters".into())
	} else if !valid_name(value) {
		Some("Only letters, numbers and spaces are allowed".into())
	} else {
		None
	}
}

fn validate_link(value: &str) -> Option<Box<str>> {
	if value.is_empty() {
		Some("This field is required".into())
	} else if Url::parse(value).is_err() {
		Some("Must be a valid absolute URL".into())
	} else {
		None
	}
}

fn set_string_field(target: &mut Box<str>, value: &serde_json::Value) -> Result<(), Box<str>> {
	match value.as_str() {
		Some(s) => {
			*target = s.into();
			Ok(())
		}
		None => Err("Must be a string".into()),
	}
}

fn set_media_field(
	target: &mut Option<MediaId>,
	value: &serde_json::Value,
) -> Result<(), Box<str>> {
	if value.is_null() {
		*target = None;
		Ok(())
	} else if let Some(id) = value.as_u64().and_then(|id| u32::try_from(id).ok()) {
		*target = Some(MediaId(id));
		Ok(())
	} else {
		Err("Must be a media id".into())
	}
}

// SocialIcon //
//************//

/// One social media icon: platform name, profile link, icon asset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialIcon {
	pub platform: Box<str>,
	pub link: Box<str>,
	pub media_id: Option<MediaId>,
}

impl ListRecord for SocialIcon {
	const FIELDS: &'static [&'static str] = &["platform", "link", "mediaId"];

	fn set_field(&mut self, field: &str, value: &serde_json::Value) -> Result<(), Box<str>> {
		match field {
			"platform" => set_string_field(&mut self.platform, value),
			"link" => set_string_field(&mut self.link, value),
			"mediaId" => set_media_field(&mut self.media_id, value),
			_ => Err("Unknown field".into()),
		}
	}

	fn validate_field(&self, field: &str) -> Option<Box<str>> {
		match field {
			"platform" => validate_name(&self.platform),
			"link" => validate_link(&self.link),
			"mediaId" => self.media_id.is_none().then(|| "An icon must be selected".into()),
			_ => None,
		}
	}

	fn media_id(&self) -> Option<MediaId> {
		self.media_id
	}
}

// PaymentIcon //
//*************//

/// One payment method icon: merchant name, icon asset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIcon {
	pub merchant: Box<str>,
	pub media_id: Option<MediaId>,
}

impl ListRecord for PaymentIcon {
	const FIELDS: &'static [&'static str] = &["merchant", "mediaId"];

	fn set_field(&mut self, field: &str, value: &serde_json::Value) -> Result<(), Box<str>> {
		match field {
			"merchant" => set_string_field(&mut self.merchant, value),
			"mediaId" => set_media_field(&mut self.media_id, value),
			_ => Err("Unknown field".into()),
		}
	}

	fn validate_field(&self, field: &str) -> Option<Box<str>> {
		match field {
			"merchant" => validate_name(&self.merchant),
			"mediaId" => self.media_id.is_none().then(|| "An icon must be selected".into()),
			_ => None,
		}
	}

	fn media_id(&self) -> Option<MediaId> {
		self.media_id
	}
}


// vim: ts=4
