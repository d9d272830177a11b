//! Asset reference resolution and file serving

pub mod handler;
pub mod mime;
pub mod resolver;

pub use resolver::{AssetRef, AssetUrlResolver};

// vim: ts=4
