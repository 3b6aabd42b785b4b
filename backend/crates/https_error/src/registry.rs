//! Status Registry - Canonical reason phrases for HTTP error statuses
//!
//! The table below is the single source for [`ENTRIES`], [`lookup`], the
//! per-status constructors on [`HttpsError`] and the [`Factory`] constants.
//! Adding or removing a row changes all of them at once.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::https_error::HttpsError;
use crate::factory::Factory;

/// Reason phrase returned for codes that are not in the registry.
pub const UNKNOWN_CODE: &str = "Unknown Code";

/// One row of the registry.
///
/// ## Fields
/// * `code` - HTTP status code (400..=511)
/// * `text` - canonical reason phrase
/// * `name` - lower camel case identifier derived from `text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusEntry {
    pub code: u16,
    pub text: &'static str,
    pub name: &'static str,
}

macro_rules! status_registry {
    (
        $(
            ($code:literal, $method:ident, $constant:ident, $name:literal, $text:literal);
        )+
    ) => {
        /// Every registered status, ascending by code.
        pub static ENTRIES: &[StatusEntry] = &[
            $(
                StatusEntry { code: $code, text: $text, name: $name },
            )+
        ];

        /// Reason phrase for `code`, or `None` when the code is not registered.
        ///
        /// ## Examples
        /// ```rust
        /// use https_error::registry::reason_phrase;
        /// assert_eq!(reason_phrase(418), Some("I'm a teapot"));
        /// assert_eq!(reason_phrase(200), None);
        /// ```
        #[inline]
        pub const fn reason_phrase(code: u16) -> Option<&'static str> {
            match code {
                $( $code => Some($text), )+
                _ => None,
            }
        }

        impl HttpsError {
            $(
                #[doc = concat!(stringify!($code), " ", $text)]
                #[inline]
                pub fn $method(message: impl Into<Cow<'static, str>>) -> Self {
                    Self::new($code, message)
                }
            )+
        }

        impl Factory {
            $(
                #[doc = concat!("Factory bound to ", stringify!($code), " ", $text)]
                pub const $constant: Factory = Factory::bound($code, $name);
            )+
        }
    };
}

status_registry! {
    (400, bad_request, BAD_REQUEST, "badRequest", "Bad Request");
    (401, unauthorized, UNAUTHORIZED, "unauthorized", "Unauthorized");
    (402, payment_required, PAYMENT_REQUIRED, "paymentRequired", "Payment Required");
    (403, forbidden, FORBIDDEN, "forbidden", "Forbidden");
    (404, not_found, NOT_FOUND, "notFound", "Not Found");
    (405, method_not_allowed, METHOD_NOT_ALLOWED, "methodNotAllowed", "Method Not Allowed");
    (406, not_acceptable, NOT_ACCEPTABLE, "notAcceptable", "Not Acceptable");
    (407, proxy_authentication_required, PROXY_AUTHENTICATION_REQUIRED, "proxyAuthenticationRequired", "Proxy Authentication Required");
    (408, request_timeout, REQUEST_TIMEOUT, "requestTimeout", "Request Timeout");
    (409, conflict, CONFLICT, "conflict", "Conflict");
    (410, gone, GONE, "gone", "Gone");
    (411, length_required, LENGTH_REQUIRED, "lengthRequired", "Length Required");
    (412, precondition_failed, PRECONDITION_FAILED, "preconditionFailed", "Precondition Failed");
    (413, payload_too_large, PAYLOAD_TOO_LARGE, "payloadTooLarge", "Payload Too Large");
    (414, uri_too_long, URI_TOO_LONG, "uriTooLong", "URI Too Long");
    (415, unsupported_media_type, UNSUPPORTED_MEDIA_TYPE, "unsupportedMediaType", "Unsupported Media Type");
    (416, range_not_satisfiable, RANGE_NOT_SATISFIABLE, "rangeNotSatisfiable", "Range Not Satisfiable");
    (417, expectation_failed, EXPECTATION_FAILED, "expectationFailed", "Expectation Failed");
    (418, im_a_teapot, IM_A_TEAPOT, "imATeapot", "I'm a teapot");
    (421, misdirected_request, MISDIRECTED_REQUEST, "misdirectedRequest", "Misdirected Request");
    (422, unprocessable_entity, UNPROCESSABLE_ENTITY, "unprocessableEntity", "Unprocessable Entity");
    (423, locked, LOCKED, "locked", "Locked");
    (424, failed_dependency, FAILED_DEPENDENCY, "failedDependency", "Failed Dependency");
    (425, unordered_collection, UNORDERED_COLLECTION, "unorderedCollection", "Unordered Collection");
    (426, upgrade_required, UPGRADE_REQUIRED, "upgradeRequired", "Upgrade Required");
    (428, precondition_required, PRECONDITION_REQUIRED, "preconditionRequired", "Precondition Required");
    (429, too_many_requests, TOO_MANY_REQUESTS, "tooManyRequests", "Too Many Requests");
    (431, request_header_fields_too_large, REQUEST_HEADER_FIELDS_TOO_LARGE, "requestHeaderFieldsTooLarge", "Request Header Fields Too Large");
    (451, unavailable_for_legal_reasons, UNAVAILABLE_FOR_LEGAL_REASONS, "unavailableForLegalReasons", "Unavailable For Legal Reasons");
    (500, internal_server_error, INTERNAL_SERVER_ERROR, "internalServerError", "Internal Server Error");
    (501, not_implemented, NOT_IMPLEMENTED, "notImplemented", "Not Implemented");
    (502, bad_gateway, BAD_GATEWAY, "badGateway", "Bad Gateway");
    (503, service_unavailable, SERVICE_UNAVAILABLE, "serviceUnavailable", "Service Unavailable");
    (504, gateway_timeout, GATEWAY_TIMEOUT, "gatewayTimeout", "Gateway Timeout");
    (505, http_version_not_supported, HTTP_VERSION_NOT_SUPPORTED, "httpVersionNotSupported", "HTTP Version Not Supported");
    (506, variant_also_negotiates, VARIANT_ALSO_NEGOTIATES, "variantAlsoNegotiates", "Variant Also Negotiates");
    (507, insufficient_storage, INSUFFICIENT_STORAGE, "insufficientStorage", "Insufficient Storage");
    (508, loop_detected, LOOP_DETECTED, "loopDetected", "Loop Detected");
    (509, bandwidth_limit_exceeded, BANDWIDTH_LIMIT_EXCEEDED, "bandwidthLimitExceeded", "Bandwidth Limit Exceeded");
    (510, not_extended, NOT_EXTENDED, "notExtended", "Not Extended");
    (511, network_authentication_required, NETWORK_AUTHENTICATION_REQUIRED, "networkAuthenticationRequired", "Network Authentication Required");
}

/// Canonical reason phrase for `code`.
///
/// Total: unregistered codes yield [`UNKNOWN_CODE`] instead of an error.
///
/// ## Examples
/// ```rust
/// use https_error::registry::lookup;
/// assert_eq!(lookup(404), "Not Found");
/// assert_eq!(lookup(999), "Unknown Code");
/// ```
pub fn lookup(code: u16) -> &'static str {
    match reason_phrase(code) {
        Some(text) => text,
        None => {
            tracing::trace!(code, "unregistered status code");
            UNKNOWN_CODE
        }
    }
}

/// Whether `code` has a registry entry.
#[inline]
pub const fn is_registered(code: u16) -> bool {
    reason_phrase(code).is_some()
}

/// Registry entry for `code`.
pub fn find(code: u16) -> Option<&'static StatusEntry> {
    ENTRIES
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|index| &ENTRIES[index])
}

/// Registry entry whose identifier is `name` (e.g. `"tooManyRequests"`).
pub fn find_by_name(name: &str) -> Option<&'static StatusEntry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Lower camel case identifier derived from a reason phrase.
    fn camel_case(text: &str) -> String {
        let words: Vec<String> = text
            .split(' ')
            .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect())
            .collect();
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            let lower = word.to_lowercase();
            if i == 0 {
                out.push_str(&lower);
            } else {
                let mut chars = lower.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
        }
        out
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(ENTRIES.len(), 41);
    }

    #[test]
    fn test_codes_are_unique_and_sorted() {
        let codes: HashSet<u16> = ENTRIES.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), ENTRIES.len());
        assert!(ENTRIES.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = ENTRIES.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ENTRIES.len());
    }

    #[test]
    fn test_names_derive_from_text() {
        for entry in ENTRIES {
            assert_eq!(camel_case(entry.text), entry.name, "code {}", entry.code);
        }
    }

    #[test]
    fn test_codes_in_error_range() {
        assert!(ENTRIES.iter().all(|e| (400..=511).contains(&e.code)));
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup(400), "Bad Request");
        assert_eq!(lookup(404), "Not Found");
        assert_eq!(lookup(414), "URI Too Long");
        assert_eq!(lookup(418), "I'm a teapot");
        assert_eq!(lookup(425), "Unordered Collection");
        assert_eq!(lookup(505), "HTTP Version Not Supported");
        assert_eq!(lookup(511), "Network Authentication Required");
    }

    #[test]
    fn test_lookup_matches_table() {
        for entry in ENTRIES {
            assert_eq!(lookup(entry.code), entry.text);
        }
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(lookup(999), UNKNOWN_CODE);
        assert_eq!(lookup(200), UNKNOWN_CODE);
        assert_eq!(lookup(419), UNKNOWN_CODE);
        assert_eq!(lookup(0), UNKNOWN_CODE);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(429).map(|e| e.name), Some("tooManyRequests"));
        assert!(find(427).is_none());
        assert_eq!(find_by_name("imATeapot").map(|e| e.code), Some(418));
        assert!(find_by_name("NotFound").is_none());
    }

    #[test]
    fn test_is_registered() {
        assert!(is_registered(451));
        assert!(!is_registered(452));
    }
}
