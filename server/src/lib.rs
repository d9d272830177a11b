//! Sitekit is a self-hosted site configuration service.
//!
//! # Features
//!
//! - Per-site configuration stored through a pluggable adapter
//!		- business contact details
//!		- theme colors, fonts and spacing
//!		- repeatable payment / social icon lists
//!	- Admin JSON APIs with field-level validation
//!	- Public read-only JSON endpoints
//!	- Asset proxying (icons, fonts) from a local public directory
//!	  or an S3-style object store

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod asset;
pub mod business;
pub mod icons;
pub mod theme;
pub mod asset_store;
pub mod config_adapter;
pub mod media_adapter;
pub mod prelude;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder, ObjectStoreConfig};

// vim: ts=4
