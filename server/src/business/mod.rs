//! Business contact details

pub mod handler;
pub mod types;

pub use types::BusinessInfo;

pub const BUSINESS_INFO_CONFIG: &str = "business_info";

// vim: ts=4
