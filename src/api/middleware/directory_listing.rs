use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Answer 404 for any path ending in a separator so stored files can never
/// be enumerated, whatever the wrapped file service would do.
pub async fn disable_directory_listing(request: Request, next: Next) -> Response {
    if request.uri().path().ends_with('/') {
        return (StatusCode::NOT_FOUND, "404 page not found\n").into_response();
    }

    next.run(request).await
}
