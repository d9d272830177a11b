use axum::{Json, extract::State};

use crate::business::{BUSINESS_INFO_CONFIG, BusinessInfo};
use crate::config_adapter::{read_config, write_config};
use crate::prelude::*;

/// GET /api/business-info
pub async fn get_business_info(State(app): State<App>) -> SkResult<Json<BusinessInfo>> {
	let info: BusinessInfo = read_config(&*app.config_adapter, BUSINESS_INFO_CONFIG).await?;
	Ok(Json(info))
}

/// PUT /api/business-info
///
/// Validates every field; nothing is persisted unless the whole payload
/// passes.
pub async fn put_business_info(
	State(app): State<App>,
	Json(info): Json<BusinessInfo>,
) -> SkResult<Json<BusinessInfo>> {
	let errors = info.validate();
	if !errors.is_empty() {
		return Err(Error::Validation(errors));
	}

	write_config(&*app.config_adapter, BUSINESS_INFO_CONFIG, &info).await?;
	info!("Business info updated");

	Ok(Json(info))
}

// vim: ts=4
