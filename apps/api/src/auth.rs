//! Cookie-presence gate for the page routes.
//!
//! PLACEHOLDER, not a security mechanism: this checks only that an
//! `authToken` cookie exists. There is no token issuance, validation, or
//! expiry. It keeps the page flow of the product (login redirect both ways)
//! without pretending to be a session model. The API and health routes are
//! never gated.

use axum::{
    extract::Request,
    http::header::COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

const AUTH_COOKIE: &str = "authToken";
pub const LOGIN_PATH: &str = "/auth";

fn has_auth_cookie(request: &Request) -> bool {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .any(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            parts.next() == Some(AUTH_COOKIE)
                && parts.next().is_some_and(|v| !v.is_empty())
        })
}

/// Redirects unauthenticated sessions away from protected pages, and
/// authenticated sessions away from the login page.
pub async fn page_gate(request: Request, next: Next) -> Response {
    let is_login_page = request.uri().path() == LOGIN_PATH;
    let authenticated = has_auth_cookie(&request);

    if !is_login_page && !authenticated {
        return Redirect::temporary(LOGIN_PATH).into_response();
    }
    if is_login_page && authenticated {
        return Redirect::temporary("/").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    fn request_with_cookie(cookie: Option<&str>) -> Request {
        let mut builder = HttpRequest::builder().uri("/");
        if let Some(c) = cookie {
            builder = builder.header(COOKIE, c);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn detects_auth_cookie() {
        assert!(has_auth_cookie(&request_with_cookie(Some("authToken=abc"))));
        assert!(has_auth_cookie(&request_with_cookie(Some(
            "other=1; authToken=abc; theme=dark"
        ))));
    }

    #[test]
    fn missing_or_empty_cookie_is_unauthenticated() {
        assert!(!has_auth_cookie(&request_with_cookie(None)));
        assert!(!has_auth_cookie(&request_with_cookie(Some("theme=dark"))));
        assert!(!has_auth_cookie(&request_with_cookie(Some("authToken="))));
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        assert!(!has_auth_cookie(&request_with_cookie(Some(
            "notauthToken=abc"
        ))));
    }
}
