//! Theme settings types and validation
//!
//! Persisted as one nested configuration object. Color values are six-digit
//! hex codes; fonts reference managed media files for their font assets.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One configurable font slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSlot {
	/// Managed media id of the font file
	pub file: Option<MediaId>,
	pub family: Box<str>,
	pub style: Box<str>,
	/// Numeric weight, 100-900, empty for unset
	pub weight: Box<str>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSettings {
	pub body: FontSlot,
	pub headings_primary: FontSlot,
	pub headings_secondary: FontSlot,
	pub hero: FontSlot,
	pub navigation: FontSlot,
	pub buttons: FontSlot,
	pub subtle: FontSlot,
	pub highlights: FontSlot,
}

impl FontSettings {
	pub fn slots(&self) -> [(&'static str, &FontSlot); 8] {
		[
			("body", &self.body),
			("headingsPrimary", &self.headings_primary),
			("headingsSecondary", &self.headings_secondary),
			("hero", &self.hero),
			("navigation", &self.navigation),
			("buttons", &self.buttons),
			("subtle", &self.subtle),
			("highlights", &self.highlights),
		]
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPair {
	pub background: Box<str>,
	pub accent: Box<str>,
}

impl Default for ColorPair {
	fn default() -> Self {
		Self { background: "#ffffff".into(), accent: "#1f87d6".into() }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractiveColors {
	pub hover: Box<str>,
	pub active: Box<str>,
	pub disabled: Box<str>,
}

impl Default for InteractiveColors {
	fn default() -> Self {
		Self { hover: "#176aa8".into(), active: "#0f4c7a".into(), disabled: "#cccccc".into() }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextColors {
	pub dark: Box<str>,
	pub light: Box<str>,
	pub accent: Box<str>,
}

impl Default for TextColors {
	fn default() -> Self {
		Self { dark: "#1a1a1a".into(), light: "#ffffff".into(), accent: "#1f87d6".into() }
	}
}

/// Default and light variant of one feedback color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackPair {
	pub default: Box<str>,
	pub light: Box<str>,
}

impl Default for FeedbackPair {
	fn default() -> Self {
		Self { default: "#666666".into(), light: "#eeeeee".into() }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackColors {
	pub error: FeedbackPair,
	pub warning: FeedbackPair,
	pub success: FeedbackPair,
	pub info: FeedbackPair,
}

impl Default for FeedbackColors {
	fn default() -> Self {
		Self {
			error: FeedbackPair { default: "#d32f2f".into(), light: "#ffcdd2".into() },
			warning: FeedbackPair { default: "#f9a825".into(), light: "#fff8e1".into() },
			success: FeedbackPair { default: "#2e7d32".into(), light: "#dcedc8".into() },
			info: FeedbackPair { default: "#0288d1".into(), light: "#e1f5fe".into() },
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
	pub primary: ColorPair,
	pub secondary: ColorPair,
	pub tertiary: ColorPair,
	pub alternate: ColorPair,
	pub interactive: InteractiveColors,
	pub text: TextColors,
	pub feedback: FeedbackColors,
}

impl Default for ColorSettings {
	fn default() -> Self {
		Self {
			primary: ColorPair::default(),
			secondary: ColorPair { background: "#3a3636".into(), accent: "#333333".into() },
			tertiary: ColorPair { background: "#f5f5f5".into(), accent: "#666666".into() },
			alternate: ColorPair { background: "#fafafa".into(), accent: "#999999".into() },
			interactive: InteractiveColors::default(),
			text: TextColors::default(),
			feedback: FeedbackColors::default(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingSettings {
	pub padding: Box<str>,
	pub margin: Box<str>,
	pub grid_columns: u32,
}

impl Default for SpacingSettings {
	fn default() -> Self {
		Self { padding: "16px".into(), margin: "16px".into(), grid_columns: 12 }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomCode {
	pub css: Box<str>,
	pub js: Box<str>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
	pub fonts: FontSettings,
	pub colors: ColorSettings,
	pub spacing: SpacingSettings,
	pub custom: CustomCode,
}

fn valid_hex_color(value: &str) -> bool {
	Regex::new(r"^#[0-9a-fA-F]{6}$").map(|re| re.is_match(value)).unwrap_or(false)
}

fn valid_font_weight(value: &str) -> bool {
	value.is_empty() || value.parse::<u32>().is_ok_and(|w| (100..=900).contains(&w))
}

impl ThemeSettings {
	pub fn validate(&self) -> Vec<FieldError> {
		let mut errors = Vec::new();

		let colors = [
			("colors.primary.background", &self.colors.primary.background),
			("colors.primary.accent", &self.colors.primary.accent),
			("colors.secondary.background", &self.colors.secondary.background),
			("colors.secondary.accent", &self.colors.secondary.accent),
			("colors.tertiary.background", &self.colors.tertiary.background),
			("colors.tertiary.accent", &self.colors.tertiary.accent),
			("colors.alternate.background", &self.colors.alternate.background),
			("colors.alternate.accent", &self.colors.alternate.accent),
			("colors.interactive.hover", &self.colors.interactive.hover),
			("colors.interactive.active", &self.colors.interactive.active),
			("colors.interactive.disabled", &self.colors.interactive.disabled),
			("colors.text.dark", &self.colors.text.dark),
			("colors.text.light", &self.colors.text.light),
			("colors.text.accent", &self.colors.text.accent),
			("colors.feedback.error.default", &self.colors.feedback.error.default),
			("colors.feedback.error.light", &self.colors.feedback.error.light),
			("colors.feedback.warning.default", &self.colors.feedback.warning.default),
			("colors.feedback.warning.light", &self.colors.feedback.warning.light),
			("colors.feedback.success.default", &self.colors.feedback.success.default),
			("colors.feedback.success.light", &self.colors.feedback.success.light),
			("colors.feedback.info.default", &self.colors.feedback.info.default),
			("colors.feedback.info.light", &self.colors.feedback.info.light),
		];
		for (field, value) in colors {
			if !valid_hex_color(value) {
				errors.push(FieldError::new(field, "Must be a hex color like #1f87d6"));
			}
		}

		for (name, slot) in self.fonts.slots() {
			if !valid_font_weight(&slot.weight) {
				errors.push(FieldError::new(
					format!("fonts.{}.weight", name),
					"Font weight must be a number between 100 and 900",
				));
			}
		}

		errors
	}
}


// vim: ts=4
