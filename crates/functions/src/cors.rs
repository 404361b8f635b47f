//! CORS for the integration functions.
//!
//! The dashboard calls the functions from the browser, from any origin.
//! Every response gets permissive CORS headers, and `OPTIONS` preflights
//! are answered with an empty 200 before reaching a handler.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Any origin may call the functions.
pub const ALLOW_ORIGIN: &str = "*";
/// Request headers the browser may send.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
/// Methods the functions answer.
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// CORS middleware.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );

    response
}
