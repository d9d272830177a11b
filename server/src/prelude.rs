pub use crate::core::app::App;
pub use crate::error::{Error, SkResult};
pub use crate::types::{FieldError, MediaId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
