use crate::{
    config::ServerConfig,
    handlers::{self, SharedConfig},
    headers::with_cors_headers,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{MethodRouter, post},
};
use std::sync::Arc;

pub const UPLOAD_PATH: &str = "/upload";
pub const REALTIME_EDIT_PATH: &str = "/realtime-edit";

fn endpoint<H, T>(handler: H) -> MethodRouter<SharedConfig>
where
    H: axum::handler::Handler<T, SharedConfig>,
    T: 'static,
{
    post(handler)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

pub fn create_app(config: ServerConfig) -> Router {
    let max_upload_bytes = config.max_upload_bytes;

    Router::new()
        .route(UPLOAD_PATH, endpoint(handlers::upload))
        .route(REALTIME_EDIT_PATH, endpoint(handlers::realtime_edit))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::map_response(with_cors_headers))
        .with_state(Arc::new(config))
}
