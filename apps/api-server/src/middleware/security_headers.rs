// [apps/api-server/src/middleware/security_headers.rs]
//! Headers applied to every response (§4.7). CORS itself is configured
//! separately as a `tower_http::cors::CorsLayer` restricted to an
//! allow-list — never a wildcard.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("referrer-policy", HeaderValue::from_static("strict-origin-when-cross-origin"));

    response
}
