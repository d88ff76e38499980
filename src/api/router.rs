use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api::handlers::{
    health_handler, landing_handler, method_unsupported_handler, upload_handler,
};
use crate::api::middleware::directory_listing::disable_directory_listing;
use crate::application::use_cases::UploadFileUseCase;
use crate::infrastructure::storage::LocalFilesystemStore;

/// Room for multipart boundaries, headers and the key field on top of the
/// file itself
pub const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub upload_use_case: Arc<UploadFileUseCase>,
    pub store: Arc<LocalFilesystemStore>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let max_file_bytes = state.upload_use_case.policy().max_file_size_bytes();
    let body_limit = usize::try_from(max_file_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(FORM_OVERHEAD_BYTES);

    let files = ServiceBuilder::new()
        .layer(axum_middleware::from_fn(disable_directory_listing))
        .service(
            ServeDir::new(state.store.paths().files_dir()).append_index_html_on_directories(false),
        );

    Router::new()
        .route(
            "/",
            get(landing_handler)
                .post(upload_handler)
                .fallback(method_unsupported_handler)
                .with_state(Arc::clone(&state.upload_use_case)),
        )
        .route(
            "/health",
            get(health_handler).with_state(Arc::clone(&state.store)),
        )
        .nest_service("/storage", files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
