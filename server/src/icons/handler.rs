//! Icon list handlers: public JSON payloads and the admin edit endpoint

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::config_adapter::{read_config, write_config};
use crate::icons::session::{EditSession, SessionState};
use crate::icons::types::{ListRecord, PaymentIcon, SocialIcon};
use crate::icons::{PAYMENT_ICONS_CONFIG, SOCIAL_ICONS_CONFIG};
use crate::prelude::*;
use crate::types::ApiResponse;

// Public JSON endpoints //
//***********************//

#[derive(Serialize)]
pub struct SocialIconView {
	pub platform: Box<str>,
	pub url: Box<str>,
	#[serde(rename = "iconUrl")]
	pub icon_url: Box<str>,
}

/// GET /api/social-icons
pub async fn get_social_icons(
	State(app): State<App>,
) -> SkResult<Json<ApiResponse<Vec<SocialIconView>>>> {
	let icons: Vec<SocialIcon> = read_config(&*app.config_adapter, SOCIAL_ICONS_CONFIG).await?;

	let mut data = Vec::with_capacity(icons.len());
	for icon in icons {
		data.push(SocialIconView {
			icon_url: app.resolver.display_url(&*app.media_adapter, icon.media_id).await?,
			platform: icon.platform,
			url: icon.link,
		});
	}

	Ok(Json(ApiResponse::new(data)))
}

#[derive(Serialize)]
pub struct PaymentIconView {
	pub merchant: Box<str>,
	#[serde(rename = "iconUrl")]
	pub icon_url: Box<str>,
}

/// GET /api/payment-icons
pub async fn get_payment_icons(
	State(app): State<App>,
) -> SkResult<Json<ApiResponse<Vec<PaymentIconView>>>> {
	let icons: Vec<PaymentIcon> = read_config(&*app.config_adapter, PAYMENT_ICONS_CONFIG).await?;

	let mut data = Vec::with_capacity(icons.len());
	for icon in icons {
		data.push(PaymentIconView {
			icon_url: app.resolver.display_url(&*app.media_adapter, icon.media_id).await?,
			merchant: icon.merchant,
		});
	}

	Ok(Json(ApiResponse::new(data)))
}

// Admin edit endpoint //
//*********************//

/// One structural command against the edit session
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditAction {
	/// Append an empty row
	Add,
	/// Remove the row at `index`
	Remove { index: usize },
	/// Validate and persist the working list
	Commit,
}

/// The admin form submits its full working list plus one action. Field
/// values are applied through the session first, so per-field validation
/// runs on every submission.
#[derive(Debug, Deserialize)]
pub struct EditRequest {
	pub records: Vec<serde_json::Value>,
	pub action: EditAction,
}

/// Re-rendered session returned after every edit submission
#[derive(Serialize)]
pub struct SessionView<R> {
	pub records: Vec<R>,
	pub errors: Vec<FieldError>,
	pub state: SessionState,
}

async fn edit_list<R: ListRecord>(
	app: &App,
	config_name: &str,
	req: EditRequest,
) -> SkResult<Json<SessionView<R>>> {
	let persisted: Vec<R> = read_config(&*app.config_adapter, config_name).await?;
	let mut session = EditSession::load(persisted);

	// Apply the submitted field values to the working copy
	for (index, record) in req.records.iter().enumerate() {
		if index >= session.records().len() {
			session.add_record();
		}
		if let Some(fields) = record.as_object() {
			for field in R::FIELDS {
				if let Some(value) = fields.get(*field) {
					session.update_field(index, field, value);
				}
			}
		}
	}

	match req.action {
		EditAction::Add => session.add_record(),
		EditAction::Remove { index } => session.remove_record(index),
		EditAction::Commit => {
			if let Some(records) = session.commit().ok() {
				let media_errors = check_media(app, &records).await;
				if media_errors.is_empty() {
					write_config(&*app.config_adapter, config_name, &records).await?;
					info!("Saved {} with {} records", config_name, records.len());
				} else {
					session.fail(media_errors);
				}
			}
		}
	}

	Ok(Json(SessionView {
		records: session.records().to_vec(),
		errors: session.errors().to_vec(),
		state: session.state(),
	}))
}

/// Commit requires every asset reference to resolve, not just to be set
async fn check_media<R: ListRecord>(app: &App, records: &[R]) -> Vec<FieldError> {
	let mut errors = Vec::new();
	for (index, record) in records.iter().enumerate() {
		if let Some(media_id) = record.media_id()
			&& app.media_adapter.read_media(media_id).await.is_err()
		{
			errors.push(FieldError::at(index, R::MEDIA_FIELD, "Media reference cannot be resolved"));
		}
	}
	errors
}

/// POST /api/social-icons/edit
pub async fn edit_social_icons(
	State(app): State<App>,
	Json(req): Json<EditRequest>,
) -> SkResult<Json<SessionView<SocialIcon>>> {
	edit_list(&app, SOCIAL_ICONS_CONFIG, req).await
}

/// POST /api/payment-icons/edit
pub async fn edit_payment_icons(
	State(app): State<App>,
	Json(req): Json<EditRequest>,
) -> SkResult<Json<SessionView<PaymentIcon>>> {
	edit_list(&app, PAYMENT_ICONS_CONFIG, req).await
}


// vim: ts=4
