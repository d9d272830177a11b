//! Repeatable icon lists (social platforms, payment merchants)

pub mod handler;
pub mod session;
pub mod types;

pub use session::{EditSession, SessionState};
pub use types::{ListRecord, PaymentIcon, SocialIcon};

/// Config keys owned by this module
pub const SOCIAL_ICONS_CONFIG: &str = "social_icons";
pub const PAYMENT_ICONS_CONFIG: &str = "payment_icons";

// vim: ts=4
