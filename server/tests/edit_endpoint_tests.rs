//! Admin edit endpoint flows: snapshot application, structural actions,
//! commit with media checks

mod common;

use std::sync::Arc;

use axum::{Json, extract::State};
use common::adapters::{MemoryAssetStore, MemoryConfigAdapter, MemoryMediaAdapter};
use serde_json::json;

use sitekit::config_adapter;
use sitekit::icons::SOCIAL_ICONS_CONFIG;
use sitekit::icons::handler::{EditAction, EditRequest, edit_social_icons, get_social_icons};
use sitekit::icons::session::SessionState;
use sitekit::icons::types::SocialIcon;
use sitekit::prelude::*;
use sitekit::{App, AppBuilder};

fn test_app(config: Arc<MemoryConfigAdapter>, media: Arc<MemoryMediaAdapter>) -> App {
	let mut builder = AppBuilder::new();
	builder
		.public_base_url("https://site.example/files/")
		.config_adapter(config)
		.media_adapter(media)
		.icon_store(Arc::new(MemoryAssetStore::default()))
		.font_store(Arc::new(MemoryAssetStore::default()));
	builder.build().expect("app state")
}

fn icon_json(platform: &str, media_id: u32) -> serde_json::Value {
	json!({
		"platform": platform,
		"link": format!("https://{}.com/acme", platform.to_lowercase()),
		"mediaId": media_id,
	})
}

#[tokio::test]
async fn test_commit_persists_applied_snapshot() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::with_media(&[
		("facebook.svg", "local:icons/facebook.svg"),
		("instagram.svg", "local:icons/instagram.svg"),
	]));
	let app = test_app(config.clone(), media);

	let req = EditRequest {
		records: vec![icon_json("Facebook", 1), icon_json("Instagram", 2)],
		action: EditAction::Commit,
	};
	let view = edit_social_icons(State(app), Json(req)).await.expect("edit").0;

	assert_eq!(view.state, SessionState::Committed);
	assert!(view.errors.is_empty());

	let saved: Vec<SocialIcon> =
		config_adapter::read_config(&*config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert_eq!(saved.len(), 2);
	assert_eq!(&*saved[0].platform, "Facebook");
	assert_eq!(&*saved[1].platform, "Instagram");
	assert_eq!(saved[1].media_id, Some(MediaId(2)));
}

#[tokio::test]
async fn test_add_action_appends_empty_row_without_persisting() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::with_media(&[("f.svg", "local:icons/f.svg")]));
	let app = test_app(config.clone(), media);

	let req = EditRequest { records: vec![icon_json("Facebook", 1)], action: EditAction::Add };
	let view = edit_social_icons(State(app), Json(req)).await.expect("edit").0;

	assert_eq!(view.state, SessionState::Dirty);
	assert_eq!(view.records.len(), 2);
	assert_eq!(&*view.records[1].platform, "");

	let saved: Vec<SocialIcon> =
		config_adapter::read_config(&*config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert!(saved.is_empty());
}

#[tokio::test]
async fn test_remove_action_drops_row_without_persisting() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::with_media(&[
		("f.svg", "local:icons/f.svg"),
		("i.svg", "local:icons/i.svg"),
	]));
	let persisted = vec![
		SocialIcon {
			platform: "Facebook".into(),
			link: "https://facebook.com/acme".into(),
			media_id: Some(MediaId(1)),
		},
		SocialIcon {
			platform: "Instagram".into(),
			link: "https://instagram.com/acme".into(),
			media_id: Some(MediaId(2)),
		},
	];
	config_adapter::write_config(&*config, SOCIAL_ICONS_CONFIG, &persisted).await.unwrap();
	let app = test_app(config.clone(), media);

	let req = EditRequest {
		records: vec![icon_json("Facebook", 1), icon_json("Instagram", 2)],
		action: EditAction::Remove { index: 0 },
	};
	let view = edit_social_icons(State(app), Json(req)).await.expect("edit").0;

	assert_eq!(view.state, SessionState::Dirty);
	assert_eq!(view.records.len(), 1);
	assert_eq!(&*view.records[0].platform, "Instagram");

	// The working copy is request-scoped; the persisted list still has both
	let saved: Vec<SocialIcon> =
		config_adapter::read_config(&*config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert_eq!(saved, persisted);
}

#[tokio::test]
async fn test_commit_with_unresolvable_media_is_errored() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::default());
	let app = test_app(config.clone(), media);

	let req = EditRequest { records: vec![icon_json("Facebook", 99)], action: EditAction::Commit };
	let view = edit_social_icons(State(app), Json(req)).await.expect("edit").0;

	assert_eq!(view.state, SessionState::Errored);
	assert_eq!(view.errors.len(), 1);
	assert_eq!(&*view.errors[0].field, "mediaId");
	assert_eq!(view.errors[0].index, Some(0));

	let saved: Vec<SocialIcon> =
		config_adapter::read_config(&*config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert!(saved.is_empty());
}

#[tokio::test]
async fn test_commit_with_invalid_fields_keeps_session_retryable() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::with_media(&[("f.svg", "local:icons/f.svg")]));
	let app = test_app(config.clone(), media);

	let req = EditRequest {
		records: vec![json!({ "platform": "Facebook", "link": "not a url", "mediaId": 1 })],
		action: EditAction::Commit,
	};
	let view = edit_social_icons(State(app), Json(req)).await.expect("edit").0;

	assert_eq!(view.state, SessionState::Errored);
	assert!(view.errors.iter().any(|err| &*err.field == "link" && err.index == Some(0)));

	let saved: Vec<SocialIcon> =
		config_adapter::read_config(&*config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert!(saved.is_empty());
}

#[tokio::test]
async fn test_get_social_icons_resolves_icon_urls() {
	let config = Arc::new(MemoryConfigAdapter::default());
	let media = Arc::new(MemoryMediaAdapter::with_media(&[("f.svg", "local:icons/facebook.svg")]));
	let persisted = vec![SocialIcon {
		platform: "Facebook".into(),
		link: "https://facebook.com/acme".into(),
		media_id: Some(MediaId(1)),
	}];
	config_adapter::write_config(&*config, SOCIAL_ICONS_CONFIG, &persisted).await.unwrap();
	let app = test_app(config, media);

	let payload = get_social_icons(State(app)).await.expect("payload").0;
	assert_eq!(payload.status, "success");
	assert_eq!(payload.data.len(), 1);
	assert_eq!(&*payload.data[0].icon_url, "https://site.example/files/icons/facebook.svg");
}
