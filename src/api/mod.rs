//! HTTP API server

use std::any::Any;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::Environment;

pub mod docs;
pub mod handlers;
pub mod state;

pub use docs::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route("/health", get(handlers::health))
        .route("/example", get(handlers::example))
        .route("/demo", get(handlers::demo))
        .route("/actionresults", get(handlers::action_results));

    if state.config.docs.enabled {
        router = router.merge(docs::swagger_ui());
    }

    with_middleware(router, state.environment()).with_state(state)
}

/// Wrap a router in request tracing and panic recovery.
///
/// Panics turn into a 500. Only development builds of the response carry
/// the panic message.
pub fn with_middleware<S>(router: Router<S>, environment: Environment) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let development = environment.is_development();
    router
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, development),
        ))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>, development: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    let body = if development {
        format!("Unhandled exception while processing the request\n\n{}\n", detail)
    } else {
        "Internal Server Error".to_string()
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
