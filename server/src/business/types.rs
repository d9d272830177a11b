//! Business info settings and validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::prelude::*;

/// Business contact details, persisted as one configuration object.
/// Unset fields serialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
	pub business_name: Box<str>,
	pub abn: Box<str>,
	pub acn: Box<str>,
	pub business_address: Box<str>,
	pub business_phone: Box<str>,
	pub business_email: Box<str>,
	pub operational_hours: Box<str>,
	pub help_portal_url: Box<str>,
	pub customer_portal_url: Box<str>,
	pub request_callback_url: Box<str>,
}

fn matches(pattern: &str, value: &str) -> bool {
	Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(false)
}

impl BusinessInfo {
	/// Field-level validation. Formats follow the admin form conventions:
	/// ABN "11 222 333 444", ACN "111 222 333", phone "1300 456 789",
	/// operational hours "9:00AM-6:00PM". Portal URLs are optional.
	pub fn validate(&self) -> Vec<FieldError> {
		let mut errors = Vec::new();

		if !matches(r"^[A-Za-z0-9.& ]+$", &self.business_name) || self.business_name.len() > 255 {
			errors.push(FieldError::new(
				"businessName",
				"Only alphanumeric characters, '.', '&' and spaces are allowed",
			));
		}
		if !matches(r"^\d{2} \d{3} \d{3} \d{3}$", &self.abn) {
			errors.push(FieldError::new("abn", "ABN must be in the format '11 222 333 444'"));
		}
		if !matches(r"^\d{3} \d{3} \d{3}$", &self.acn) {
			errors.push(FieldError::new("acn", "ACN must be in the format '111 222 333'"));
		}
		if !matches(r"^[A-Za-z0-9,# ]+$", &self.business_address)
			|| self.business_address.len() > 255
		{
			errors.push(FieldError::new(
				"businessAddress",
				"Only alphanumeric characters, '#', ',' and spaces are allowed",
			));
		}
		if !matches(r"^\d{4} \d{3} \d{3}$", &self.business_phone) {
			errors.push(FieldError::new(
				"businessPhone",
				"Phone must be in the format '1300 456 789'",
			));
		}
		if !matches(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", &self.business_email) {
			errors.push(FieldError::new("businessEmail", "Not a valid email address"));
		}
		if !matches(r"^\d{1,2}:\d{2}(AM|PM)-\d{1,2}:\d{2}(AM|PM)$", &self.operational_hours) {
			errors.push(FieldError::new(
				"operationalHours",
				"Operational hours must be in the format '9:00AM-6:00PM'",
			));
		}

		for (field, value) in [
			("helpPortalUrl", &self.help_portal_url),
			("customerPortalUrl", &self.customer_portal_url),
			("requestCallbackUrl", &self.request_callback_url),
		] {
			if !value.is_empty() && Url::parse(value).is_err() {
				errors.push(FieldError::new(field, "Must be a valid absolute URL"));
			}
		}

		errors
	}
}


// vim: ts=4
