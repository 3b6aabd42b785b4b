//! HTTPS Error - Error entity bound to an HTTP status
//!
//! Defines [`HttpsError`] struct and [`HttpsResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Serialize, Serializer};

use super::body::ErrorBody;
use super::markup;
use crate::registry;

/// HTTP error carrying a status code, its reason phrase and a message.
///
/// The reason phrase is always resolved from the code through the status
/// registry, so `code` and `text` never disagree. Unregistered codes are
/// accepted and carry [`registry::UNKNOWN_CODE`] as their text.
///
/// ## Fields
/// * `code` - HTTP status code
/// * `text` - canonical reason phrase for `code`
/// * `message` - free-form diagnostic detail
///
/// ## Examples
/// ```rust
/// use https_error::HttpsError;
///
/// let err = HttpsError::new(404, "missing");
/// assert_eq!(err.text(), "Not Found");
/// assert_eq!(err.to_string(), "Error: 404 (Not Found) missing");
///
/// let err = HttpsError::too_many_requests("slow down");
/// assert_eq!(err.code(), 429);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HttpsError {
    code: u16,
    text: &'static str,
    message: Cow<'static, str>,
}

/// Shorthand for `Result<T, HttpsError>`.
///
/// ## Examples
/// ```rust
/// use https_error::{HttpsError, HttpsResult};
///
/// fn find_user(id: u32) -> HttpsResult<String> {
///     if id == 0 {
///         return Err(HttpsError::not_found("User not found"));
///     }
///     Ok("Alice".to_string())
/// }
/// ```
pub type HttpsResult<T> = Result<T, HttpsError>;

impl HttpsError {
    /// Discriminator shared by every instance.
    pub const NAME: &'static str = "HttpsError";

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an error for `code`, resolving its reason phrase.
    #[inline]
    pub fn new(code: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            text: registry::lookup(code),
            message: message.into(),
        }
    }

    /// Create an error for `code` from an existing error value.
    ///
    /// When `err` is itself an [`HttpsError`] its message is reused as is;
    /// any other error contributes its `Display` output.
    ///
    /// ## Examples
    /// ```rust
    /// use https_error::HttpsError;
    ///
    /// let io_err = std::io::Error::other("boom");
    /// let err = HttpsError::from_error(502, &io_err);
    /// assert_eq!(err.message(), "boom");
    ///
    /// let inner = HttpsError::not_found("missing");
    /// assert_eq!(HttpsError::from_error(500, &inner).message(), "missing");
    /// ```
    pub fn from_error(code: u16, err: &(dyn Error + 'static)) -> Self {
        let message = match err.downcast_ref::<HttpsError>() {
            Some(inner) => inner.message.clone(),
            None => Cow::Owned(err.to_string()),
        };
        Self::new(code, message)
    }

    /// First [`HttpsError`] found in `err` or its `source()` chain.
    ///
    /// ## Examples
    /// ```rust
    /// use std::error::Error;
    /// use https_error::HttpsError;
    ///
    /// let boxed: Box<dyn Error> = Box::new(HttpsError::gone("expired"));
    /// assert_eq!(HttpsError::find_in(boxed.as_ref()).map(|e| e.code()), Some(410));
    ///
    /// let other = std::io::Error::other("plain");
    /// assert!(HttpsError::find_in(&other).is_none());
    /// ```
    pub fn find_in<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a HttpsError> {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(found) = e.downcast_ref::<HttpsError>() {
                return Some(found);
            }
            current = e.source();
        }
        None
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// HTTP status code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Reason phrase for the code.
    #[inline]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Diagnostic message, independent of the reason phrase.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Always [`HttpsError::NAME`].
    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Whether the code has a registry entry.
    #[inline]
    pub fn is_registered(&self) -> bool {
        registry::is_registered(self.code)
    }

    /// 5xx status.
    #[inline]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }

    /// 4xx status.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    // ========================================================================
    // Renderers
    // ========================================================================

    /// Single-line summary: `Error: {code} ({text}) {message}`.
    pub fn to_display_string(&self) -> String {
        format!("Error: {} ({}) {}", self.code, self.text, self.message)
    }

    /// Structured body for API responses.
    ///
    /// ## Examples
    /// ```rust
    /// use https_error::HttpsError;
    ///
    /// let err = HttpsError::not_found("missing");
    /// let body = err.to_structured();
    /// assert_eq!(body.status, "error");
    /// assert_eq!(body.code, 404);
    /// ```
    pub fn to_structured(&self) -> ErrorBody<'_> {
        ErrorBody::new(self.code, self.text, &self.message)
    }

    /// [`Self::to_structured`] serialized as a JSON string.
    ///
    /// ## Examples
    /// ```rust
    /// use https_error::HttpsError;
    ///
    /// assert_eq!(
    ///     HttpsError::not_found("missing").to_json_string(),
    ///     r#"{"status":"error","code":404,"text":"Not Found","message":"missing"}"#,
    /// );
    /// ```
    pub fn to_json_string(&self) -> String {
        self.to_structured().to_json_string()
    }

    /// HTML fragment for debug pages. `text` and `message` are escaped.
    pub fn to_markup(&self) -> String {
        markup::render(self.code, self.text, &self.message)
    }
}

impl fmt::Debug for HttpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(Self::NAME)
            .field("code", &self.code)
            .field("text", &self.text)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for HttpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {} ({}) {}", self.code, self.text, self.message)
    }
}

impl Error for HttpsError {}

impl Serialize for HttpsError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// Converts a `Result<T, E>` into an [`HttpsResult<T>`].
pub trait ResultExt<T> {
    /// Replace the error with an [`HttpsError`] for `code`, keeping its message.
    fn map_https_err(self, code: u16) -> HttpsResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + 'static,
{
    fn map_https_err(self, code: u16) -> HttpsResult<T> {
        self.map_err(|e| HttpsError::from_error(code, &e))
    }
}

/// Converts an `Option<T>` into an [`HttpsResult<T>`].
pub trait OptionExt<T> {
    /// `None` becomes an [`HttpsError`] for `code`.
    fn ok_or_https_err(self, code: u16, message: impl Into<Cow<'static, str>>) -> HttpsResult<T>;

    /// `None` becomes a 404 Not Found.
    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> HttpsResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_https_err(self, code: u16, message: impl Into<Cow<'static, str>>) -> HttpsResult<T> {
        self.ok_or_else(|| HttpsError::new(code, message))
    }

    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> HttpsResult<T> {
        self.ok_or_https_err(404, message)
    }
}
