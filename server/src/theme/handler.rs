//! Theme settings handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::config_adapter::{read_config, write_config};
use crate::prelude::*;
use crate::theme::THEME_SETTINGS_CONFIG;
use crate::theme::types::{ColorSettings, CustomCode, FontSlot, SpacingSettings, ThemeSettings};

/// Font slot as rendered for clients: metadata plus the resolved font URL
#[derive(Serialize)]
pub struct FontView {
	pub family: Box<str>,
	pub style: Box<str>,
	pub weight: Box<str>,
	pub url: Box<str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontsView {
	pub body: FontView,
	pub headings_primary: FontView,
	pub headings_secondary: FontView,
	pub hero: FontView,
	pub navigation: FontView,
	pub buttons: FontView,
	pub subtle: FontView,
	pub highlights: FontView,
}

#[derive(Serialize)]
pub struct ThemeSettingsView {
	pub fonts: FontsView,
	pub colors: ColorSettings,
	pub spacing: SpacingSettings,
	pub custom: CustomCode,
}

async fn font_view(app: &App, slot: &FontSlot) -> SkResult<FontView> {
	Ok(FontView {
		family: slot.family.clone(),
		style: slot.style.clone(),
		weight: slot.weight.clone(),
		url: app.resolver.display_url(&*app.media_adapter, slot.file).await?,
	})
}

/// GET /api/theme-settings
pub async fn get_theme_settings(State(app): State<App>) -> SkResult<Json<ThemeSettingsView>> {
	let settings: ThemeSettings = read_config(&*app.config_adapter, THEME_SETTINGS_CONFIG).await?;

	let fonts = FontsView {
		body: font_view(&app, &settings.fonts.body).await?,
		headings_primary: font_view(&app, &settings.fonts.headings_primary).await?,
		headings_secondary: font_view(&app, &settings.fonts.headings_secondary).await?,
		hero: font_view(&app, &settings.fonts.hero).await?,
		navigation: font_view(&app, &settings.fonts.navigation).await?,
		buttons: font_view(&app, &settings.fonts.buttons).await?,
		subtle: font_view(&app, &settings.fonts.subtle).await?,
		highlights: font_view(&app, &settings.fonts.highlights).await?,
	};

	Ok(Json(ThemeSettingsView {
		fonts,
		colors: settings.colors,
		spacing: settings.spacing,
		custom: settings.custom,
	}))
}

/// PUT /api/theme-settings
pub async fn put_theme_settings(
	State(app): State<App>,
	Json(settings): Json<ThemeSettings>,
) -> SkResult<Json<ThemeSettings>> {
	let errors = settings.validate();
	if !errors.is_empty() {
		return Err(Error::Validation(errors));
	}

	write_config(&*app.config_adapter, THEME_SETTINGS_CONFIG, &settings).await?;
	info!("Theme settings updated");

	Ok(Json(settings))
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_fonts_view_uses_camel_case_slot_names() {
		fn slot(name: &str) -> FontView {
			FontView { family: name.into(), style: "".into(), weight: "".into(), url: "".into() }
		}

		let fonts = FontsView {
			body: slot("body"),
			headings_primary: slot("hp"),
			headings_secondary: slot("hs"),
			hero: slot("hero"),
			navigation: slot("nav"),
			buttons: slot("buttons"),
			subtle: slot("subtle"),
			highlights: slot("highlights"),
		};

		let value = serde_json::to_value(&fonts).unwrap();
		let object = value.as_object().unwrap();
		assert_eq!(object.len(), 8);
		for key in [
			"body",
			"headingsPrimary",
			"headingsSecondary",
			"hero",
			"navigation",
			"buttons",
			"subtle",
			"highlights",
		] {
			assert!(object.contains_key(key), "missing slot {}", key);
		}
	}
}

// vim: ts=4
