//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`HttpsError`].
//! The converted message is the source error's display string.

use super::https_error::HttpsError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for HttpsError {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => 404,
            std::io::ErrorKind::PermissionDenied => 403,
            std::io::ErrorKind::TimedOut => 408,
            _ => 500,
        };
        HttpsError::from_error(code, &err)
    }
}

impl From<std::fmt::Error> for HttpsError {
    fn from(err: std::fmt::Error) -> Self {
        HttpsError::from_error(500, &err)
    }
}

impl From<std::string::FromUtf8Error> for HttpsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        HttpsError::from_error(400, &err)
    }
}

impl From<std::num::ParseIntError> for HttpsError {
    fn from(err: std::num::ParseIntError) -> Self {
        HttpsError::from_error(400, &err)
    }
}

impl From<std::num::ParseFloatError> for HttpsError {
    fn from(err: std::num::ParseFloatError) -> Self {
        HttpsError::from_error(400, &err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for HttpsError {
    fn from(err: serde_json::Error) -> Self {
        let code = if err.is_syntax() || err.is_data() || err.is_eof() {
            400
        } else {
            500
        };
        HttpsError::from_error(code, &err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Log grouping used when an error is turned into a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "axum"), allow(dead_code))]
enum ResponseClass {
    Client,
    Server,
    NonError,
}

impl HttpsError {
    #[cfg_attr(not(feature = "axum"), allow(dead_code))]
    fn response_class(&self) -> ResponseClass {
        if self.is_server_error() {
            ResponseClass::Server
        } else if self.is_client_error() {
            ResponseClass::Client
        } else {
            ResponseClass::NonError
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for HttpsError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        match self.response_class() {
            ResponseClass::Server => tracing::error!(
                code = self.code(),
                text = self.text(),
                message = %self.message(),
                "Responding with server error"
            ),
            ResponseClass::Client => tracing::debug!(
                code = self.code(),
                text = self.text(),
                message = %self.message(),
                "Responding with client error"
            ),
            ResponseClass::NonError => tracing::warn!(
                code = self.code(),
                text = self.text(),
                message = %self.message(),
                "Responding with an error whose code is outside 4xx/5xx"
            ),
        }

        let status = StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_structured())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HttpsError = io_err.into();
        assert_eq!(err.code(), 404);
        assert_eq!(err.message(), "file not found");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: HttpsError = io_err.into();
        assert_eq!(err.code(), 403);

        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        let err: HttpsError = io_err.into();
        assert_eq!(err.text(), "Request Timeout");

        let err: HttpsError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.code(), 500);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<i32, _> = "abc".parse();
        let err: HttpsError = parse_err.unwrap_err().into();
        assert_eq!(err.code(), 400);
        assert_eq!(err.message(), "invalid digit found in string");
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: HttpsError = utf8_err.into();
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let expected = json_err.to_string();
        let err: HttpsError = json_err.into();
        assert_eq!(err.code(), 400);
        assert_eq!(err.message(), expected);
        assert_eq!(err.message(), "expected value at line 1 column 1");
    }

    #[test]
    fn test_response_class() {
        assert_eq!(HttpsError::not_found("x").response_class(), ResponseClass::Client);
        assert_eq!(HttpsError::bad_gateway("x").response_class(), ResponseClass::Server);
        assert_eq!(HttpsError::new(302, "x").response_class(), ResponseClass::NonError);
        assert_eq!(HttpsError::new(1000, "x").response_class(), ResponseClass::NonError);
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse_port(raw: &str) -> Result<u16, HttpsError> {
            Ok(raw.parse::<u16>()?)
        }

        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port("http").unwrap_err().code(), 400);
    }

    #[cfg(feature = "axum")]
    mod axum_tests {
        use axum::response::IntoResponse;
        use http::StatusCode;

        use super::*;

        #[tokio::test]
        async fn test_into_response_status_and_body() {
            let response = HttpsError::not_found("missing").into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(
                &bytes[..],
                br#"{"status":"error","code":404,"text":"Not Found","message":"missing"}"#
            );
        }

        #[test]
        fn test_into_response_invalid_code() {
            let response = HttpsError::new(1000, "out of range").into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        #[test]
        fn test_into_response_unregistered_code() {
            let response = HttpsError::new(599, "custom").into_response();
            assert_eq!(response.status().as_u16(), 599);
        }
    }
}
