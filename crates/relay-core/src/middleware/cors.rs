// CORS middleware
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer from the configured origin allow-list.
///
/// Browsers from origins outside the list get no
/// `Access-Control-Allow-Origin` header. Preflight `OPTIONS` requests are
/// answered by the layer itself (204, empty body) before any handler runs.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}

/// Rewrite successful preflight answers to 204 No Content.
///
/// `CorsLayer` replies to preflights with 200; the frontend contract expects
/// an empty 204. Must be layered OUTSIDE the CORS layer so it sees its
/// response.
pub async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
