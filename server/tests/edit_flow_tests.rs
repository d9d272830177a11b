//! Icon list edit flows against in-memory adapters

mod common;

use common::adapters::{MemoryConfigAdapter, MemoryMediaAdapter};
use serde_json::json;

use sitekit::asset::AssetUrlResolver;
use sitekit::config_adapter::{self, ConfigAdapter};
use sitekit::icons::session::{EditSession, SessionState};
use sitekit::icons::types::{PaymentIcon, SocialIcon};
use sitekit::icons::{PAYMENT_ICONS_CONFIG, SOCIAL_ICONS_CONFIG};
use sitekit::prelude::*;

#[tokio::test]
async fn test_social_icons_commit_roundtrip_preserves_order() {
	let config = MemoryConfigAdapter::default();

	let mut session = EditSession::<SocialIcon>::load(vec![]);
	for (i, platform) in ["Facebook", "Instagram", "LinkedIn"].iter().enumerate() {
		session.add_record();
		session.update_field(i, "platform", &json!(platform));
		session.update_field(i, "link", &json!(format!("https://{}.com/acme", platform)));
		session.update_field(i, "mediaId", &json!(i as u32 + 1));
	}

	let records = session.commit().expect("valid list");
	assert_eq!(session.state(), SessionState::Committed);
	config_adapter::write_config(&config, SOCIAL_ICONS_CONFIG, &records).await.unwrap();

	let loaded: Vec<SocialIcon> =
		config_adapter::read_config(&config, SOCIAL_ICONS_CONFIG).await.unwrap();
	assert_eq!(loaded, records);
	assert_eq!(&*loaded[0].platform, "Facebook");
	assert_eq!(&*loaded[2].platform, "LinkedIn");
}

#[tokio::test]
async fn test_payment_icons_default_to_empty_list() {
	let config = MemoryConfigAdapter::default();
	let loaded: Vec<PaymentIcon> =
		config_adapter::read_config(&config, PAYMENT_ICONS_CONFIG).await.unwrap();
	assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_failed_commit_leaves_persisted_list_untouched() {
	let config = MemoryConfigAdapter::default();
	let persisted = vec![PaymentIcon { merchant: "Visa".into(), media_id: Some(MediaId(1)) }];
	config_adapter::write_config(&config, PAYMENT_ICONS_CONFIG, &persisted).await.unwrap();

	let mut session = EditSession::load(persisted.clone());
	session.add_record();
	assert!(session.commit().is_err());
	assert_eq!(session.state(), SessionState::Errored);

	// Nothing was written back
	let loaded: Vec<PaymentIcon> =
		config_adapter::read_config(&config, PAYMENT_ICONS_CONFIG).await.unwrap();
	assert_eq!(loaded, persisted);
}

#[tokio::test]
async fn test_display_url_resolves_media_through_adapter() {
	let media = MemoryMediaAdapter::with_media(&[
		("visa", "local:icons/visa%20card.png"),
		("mastercard", "object-store:icons/mastercard.svg"),
	]);
	let resolver = AssetUrlResolver::new(
		"https://site.example/files/",
		Some(sitekit::ObjectStoreConfig {
			bucket: "mybucket".into(),
			prefix: "assets".into(),
			storage_domain: "s3.amazonaws.com".into(),
		}),
	);

	let url = resolver.display_url(&media, Some(MediaId(1))).await.unwrap();
	assert_eq!(&*url, "https://site.example/files/icons/visa card.png");

	let url = resolver.display_url(&media, Some(MediaId(2))).await.unwrap();
	assert_eq!(&*url, "https://mybucket.s3.amazonaws.com/assets/icons/mastercard.svg");
}

#[tokio::test]
async fn test_display_url_renders_empty_for_missing_media() {
	let media = MemoryMediaAdapter::default();
	let resolver = AssetUrlResolver::new("https://site.example/files/", None);

	let url = resolver.display_url(&media, Some(MediaId(42))).await.unwrap();
	assert_eq!(&*url, "");

	let url = resolver.display_url(&media, None).await.unwrap();
	assert_eq!(&*url, "");
}

#[tokio::test]
async fn test_config_values_listable_by_prefix() {
	let config = MemoryConfigAdapter::default();
	config.update_value(SOCIAL_ICONS_CONFIG, Some(json!([]))).await.unwrap();
	config.update_value(PAYMENT_ICONS_CONFIG, Some(json!([]))).await.unwrap();
	config.update_value("business_info", Some(json!({}))).await.unwrap();

	let values = config.list_values(Some("payment_")).await.unwrap();
	assert_eq!(values.len(), 1);
	assert!(values.contains_key(PAYMENT_ICONS_CONFIG));
}
