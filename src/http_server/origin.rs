//! Cross-origin policy.
//!
//! Decides, per request, what `Access-Control-Allow-Origin` value a response
//! gets, and answers `OPTIONS` preflights. A listed origin is echoed back
//! verbatim so the allow-list stays authoritative; a request without an
//! `Origin` header is not cross-origin and gets the wildcard.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Methods advertised on a granted preflight.
pub const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE";

/// Outcome of judging one request's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Attach `Access-Control-Allow-Origin` with this value
    Granted(HeaderValue),
    /// Attach no cross-origin headers
    Denied,
}

/// Allow-list of origins granted cross-origin access.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    /// Create a policy with an explicit allow-list.
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    /// Decide the allow-origin value for a request.
    ///
    /// Matching is an exact string comparison: scheme, host, and port all
    /// count.
    pub fn judge(&self, origin: Option<&HeaderValue>) -> OriginDecision {
        match origin {
            None => OriginDecision::Granted(HeaderValue::from_static("*")),
            Some(value) => match value.to_str() {
                Ok(origin) if self.allowed.iter().any(|allowed| allowed == origin) => {
                    OriginDecision::Granted(value.clone())
                }
                _ => OriginDecision::Denied,
            },
        }
    }
}

/// Middleware layered over every route.
///
/// Preflights are answered here without reaching the router; everything else
/// passes through and gets the allow-origin header stamped on the way out.
pub async fn apply_origin_policy(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let decision = policy.judge(request.headers().get(ORIGIN));

    if request.method() == Method::OPTIONS {
        return preflight_response(&decision);
    }

    let mut response = next.run(request).await;
    if let OriginDecision::Granted(value) = decision {
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    response
}

/// Preflights answer 200 regardless of the decision; a denied origin just
/// gets no cross-origin headers, which is what makes the browser refuse.
fn preflight_response(decision: &OriginDecision) -> Response {
    let mut response = StatusCode::OK.into_response();
    if let OriginDecision::Granted(value) = decision {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(vec![
            "http://localhost:8080".to_string(),
            "http://movies.com".to_string(),
        ])
    }

    #[test]
    fn test_absent_origin_gets_wildcard() {
        let decision = policy().judge(None);
        assert_eq!(
            decision,
            OriginDecision::Granted(HeaderValue::from_static("*"))
        );
    }

    #[test]
    fn test_listed_origin_is_echoed() {
        let origin = HeaderValue::from_static("http://movies.com");
        let decision = policy().judge(Some(&origin));
        assert_eq!(decision, OriginDecision::Granted(origin));
    }

    #[test]
    fn test_unlisted_origin_is_denied() {
        let origin = HeaderValue::from_static("http://evil.example");
        assert_eq!(policy().judge(Some(&origin)), OriginDecision::Denied);
    }

    #[test]
    fn test_match_is_exact_on_scheme_and_port() {
        let https = HeaderValue::from_static("https://movies.com");
        assert_eq!(policy().judge(Some(&https)), OriginDecision::Denied);

        let other_port = HeaderValue::from_static("http://localhost:8081");
        assert_eq!(policy().judge(Some(&other_port)), OriginDecision::Denied);
    }

    #[test]
    fn test_empty_allow_list_denies_every_origin() {
        let policy = OriginPolicy::new(Vec::new());
        let origin = HeaderValue::from_static("http://localhost:8080");
        assert_eq!(policy.judge(Some(&origin)), OriginDecision::Denied);
        assert!(matches!(policy.judge(None), OriginDecision::Granted(_)));
    }
}
