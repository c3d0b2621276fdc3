//! Bearer token transport
//!
//! Parsing of the `Authorization: Bearer <token>` request header. The
//! header is the primary transport for session tokens; callers that also
//! accept a body field handle that fallback themselves.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, is not valid UTF-8, uses a
/// different scheme, or carries an empty token. The scheme comparison is
/// case-insensitive per RFC 6750.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with_authorization("bearer abc");
        assert_eq!(extract_bearer(&headers), Some("abc".to_string()));

        let headers = headers_with_authorization("BEARER abc");
        assert_eq!(extract_bearer(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_rejects_missing_or_empty() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);

        let headers = headers_with_authorization("Bearer ");
        assert_eq!(extract_bearer(&headers), None);

        let headers = headers_with_authorization("Bearer");
        assert_eq!(extract_bearer(&headers), None);
    }
}
