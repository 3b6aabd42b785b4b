//! Error Factory - Constructors bound to a fixed status code
//!
//! One [`Factory`] constant exists per registry entry (`Factory::NOT_FOUND`,
//! `Factory::TOO_MANY_REQUESTS`, ...). They are generated from the same table
//! as the registry, and can also be looked up by identifier or code.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::https_error::HttpsError;
use crate::format;
use crate::registry::{self, ENTRIES};

/// Identifier that does not name any factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error factory: {0}")]
pub struct UnknownFactory(pub String);

/// Constructor shortcut bound to one registered status code.
///
/// ## Examples
/// ```rust
/// use https_error::Factory;
/// use serde_json::json;
///
/// let err = Factory::NOT_FOUND.format("user %s", &[json!("alice")]);
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.message(), "user alice");
///
/// let factory: Factory = "tooManyRequests".parse().unwrap();
/// assert_eq!(factory.code(), 429);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factory {
    code: u16,
    name: &'static str,
}

impl Factory {
    pub(crate) const fn bound(code: u16, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Every factory, ascending by code.
    pub fn all() -> impl ExactSizeIterator<Item = Factory> {
        ENTRIES
            .iter()
            .map(|entry| Factory::bound(entry.code, entry.name))
    }

    /// Factory whose identifier is `name` (e.g. `"notFound"`).
    pub fn by_name(name: &str) -> Option<Factory> {
        registry::find_by_name(name).map(|entry| Factory::bound(entry.code, entry.name))
    }

    /// Factory bound to `code`.
    pub fn by_code(code: u16) -> Option<Factory> {
        registry::find(code).map(|entry| Factory::bound(entry.code, entry.name))
    }

    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Lower camel case identifier.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn text(&self) -> &'static str {
        registry::lookup(self.code)
    }

    /// Error with a preformatted message.
    pub fn message(&self, message: impl Into<Cow<'static, str>>) -> HttpsError {
        HttpsError::new(self.code, message)
    }

    /// Error whose message is `template` formatted against `args`.
    ///
    /// See [`crate::format`] for the placeholder rules.
    pub fn format(&self, template: &str, args: &[Value]) -> HttpsError {
        HttpsError::new(self.code, format::format(template, args))
    }

    /// Error reusing the message of an existing error value.
    pub fn from_error(&self, err: &(dyn Error + 'static)) -> HttpsError {
        HttpsError::from_error(self.code, err)
    }
}

impl fmt::Display for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Factory {
    type Err = UnknownFactory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factory::by_name(s).ok_or_else(|| UnknownFactory(s.to_string()))
    }
}

/// Build an [`HttpsError`] through a [`Factory`] constant.
///
/// ## Forms
/// * `https_error!(NOT_FOUND, "user %s", name)` - printf-style message
/// * `https_error!(NOT_FOUND, err = e)` - message taken from an error value
///
/// Arguments may be any expression accepted by `serde_json::json!`.
///
/// ## Examples
/// ```rust
/// use https_error::https_error;
///
/// let err = https_error!(BAD_REQUEST, "x=%d", 5);
/// assert_eq!(err.code(), 400);
/// assert_eq!(err.message(), "x=5");
///
/// let io_err = std::io::Error::other("boom");
/// let err = https_error!(BAD_GATEWAY, err = io_err);
/// assert_eq!(err.message(), "boom");
/// ```
#[macro_export]
macro_rules! https_error {
    ($factory:ident, err = $err:expr) => {
        $crate::Factory::$factory.from_error(&$err)
    };
    ($factory:ident, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Factory::$factory.format(
            ::core::convert::AsRef::<str>::as_ref(&$template),
            &[$($crate::__private::json!($arg)),*],
        )
    };
}
