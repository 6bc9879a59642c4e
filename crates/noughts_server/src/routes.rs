//! Router for the static responder.

use crate::ServerConfig;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{info, instrument};

/// Path of the only route.
pub const INDEX_PATH: &str = "/";

/// Builds the router: `GET /` answers with the configured body, every other
/// path falls through to a 404.
#[instrument(skip(config), fields(body_len = config.body().len()))]
pub fn router(config: &ServerConfig) -> Router {
    let body: Arc<str> = Arc::from(config.body().as_str());

    Router::new()
        .route(INDEX_PATH, get(index))
        .with_state(body)
        .layer(ServiceBuilder::new().map_request(log_request))
}

async fn index(State(body): State<Arc<str>>) -> impl IntoResponse {
    (StatusCode::OK, body.to_string())
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(
        method = %req.method(),
        uri = %req.uri(),
        "Incoming HTTP request"
    );
    req
}
