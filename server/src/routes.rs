use axum::{
	Router,
	routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::App;
use crate::asset;
use crate::business;
use crate::icons;
use crate::theme;

fn init_api(state: App) -> Router {
	Router::new()
		.route(
			"/api/business-info",
			get(business::handler::get_business_info).put(business::handler::put_business_info),
		)
		.route(
			"/api/theme-settings",
			get(theme::handler::get_theme_settings).put(theme::handler::put_theme_settings),
		)
		.route("/api/social-icons", get(icons::handler::get_social_icons))
		.route("/api/social-icons/edit", post(icons::handler::edit_social_icons))
		.route("/api/payment-icons", get(icons::handler::get_payment_icons))
		.route("/api/payment-icons/edit", post(icons::handler::edit_payment_icons))
		.with_state(state)
}

fn init_files(state: App) -> Router {
	Router::new()
		.route("/icon/{file_name}", get(asset::handler::get_icon_file))
		.route("/font/{file_name}", get(asset::handler::get_font_file))
		.with_state(state)
}

pub fn init(state: App) -> Router {
	Router::new()
		.merge(init_api(state.clone()))
		.merge(init_files(state))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

// vim: ts=4
