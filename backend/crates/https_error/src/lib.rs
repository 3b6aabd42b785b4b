//! HTTPS Error - HTTP status errors with ready-made renderings
//!
//! This crate contains:
//! - A fixed registry of HTTP error statuses (400-511) and their reason phrases
//! - [`HttpsError`], an error carrying `code`, `text` and `message`
//! - One constructor per status (`HttpsError::not_found`, [`Factory::NOT_FOUND`], ...)
//! - Display, JSON and HTML renderings of an error
//!
//! ## Examples
//! ```rust
//! use https_error::{HttpsError, https_error};
//!
//! let err = https_error!(NOT_FOUND, "user %s", "alice");
//! assert_eq!(err.to_string(), "Error: 404 (Not Found) user alice");
//! assert_eq!(err, HttpsError::new(404, "user alice"));
//! ```

pub mod error {
    pub mod body;
    pub mod conversions;
    pub mod https_error;
    pub mod markup;
}
pub mod factory;
pub mod format;
pub mod registry;

pub use error::body::ErrorBody;
pub use error::https_error::{HttpsError, HttpsResult, OptionExt, ResultExt};
pub use factory::{Factory, UnknownFactory};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
