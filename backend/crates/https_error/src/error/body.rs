//! Error Body - Structured rendering of an [`HttpsError`]
//!
//! [`HttpsError`]: super::https_error::HttpsError

use serde::Serialize;

/// Value of the `status` field in every error body.
pub const ERROR_STATUS: &str = "error";

/// API error body.
///
/// Serializes with the keys `status`, `code`, `text`, `message`, in that
/// order.
///
/// ## Examples
/// ```rust
/// use https_error::error::body::ErrorBody;
///
/// let body = ErrorBody::new(404, "Not Found", "missing");
/// assert_eq!(
///     body.to_json_string(),
///     r#"{"status":"error","code":404,"text":"Not Found","message":"missing"}"#,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody<'a> {
    pub status: &'static str,
    pub code: u16,
    pub text: &'a str,
    pub message: &'a str,
}

impl<'a> ErrorBody<'a> {
    #[inline]
    pub fn new(code: u16, text: &'a str, message: &'a str) -> Self {
        Self {
            status: ERROR_STATUS,
            code,
            text,
            message,
        }
    }

    /// JSON encoding of the body.
    pub fn to_json_string(&self) -> String {
        // Only string and integer fields: encoding cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order() {
        let json = ErrorBody::new(500, "Internal Server Error", "oops").to_json_string();
        let positions: Vec<usize> = ["\"status\"", "\"code\"", "\"text\"", "\"message\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_escapes_message() {
        let json = ErrorBody::new(400, "Bad Request", "say \"hi\"").to_json_string();
        assert_eq!(
            json,
            r#"{"status":"error","code":400,"text":"Bad Request","message":"say \"hi\""}"#
        );
    }
}
