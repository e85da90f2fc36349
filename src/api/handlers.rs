//! API handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::service::DemoService;

/// Body of `GET /example`.
pub const EXAMPLE_MESSAGE: &str = "This is an example of a GET endpoints";

/// Body of `GET /actionresults` when the caller does not accept the cost.
pub const REJECTION_MESSAGE: &str = "It's not okay to needlessly consume resources.";

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment().to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// Constant example response
#[utoipa::path(
    get,
    path = "/example",
    tag = "demo",
    responses((status = 200, description = "Fixed example text", body = String, content_type = "text/plain"))
)]
pub async fn example() -> &'static str {
    EXAMPLE_MESSAGE
}

/// Run the demo service and return its result as text
#[utoipa::path(
    get,
    path = "/demo",
    tag = "demo",
    responses((status = 200, description = "Demo service result", body = String, content_type = "text/plain"))
)]
pub async fn demo(service: DemoService) -> String {
    service.needlessly_consume_resources()
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActionResultsQuery {
    /// Whether consuming resources is acceptable for this call
    pub acceptable: bool,
}

/// Run the demo service only if the caller accepts it
///
/// A missing or non-boolean `acceptable` never reaches this handler; the
/// `Query` extractor answers with its own 400.
#[utoipa::path(
    get,
    path = "/actionresults",
    tag = "demo",
    params(ActionResultsQuery),
    responses(
        (status = 200, description = "Demo service result", body = String),
        (status = 400, description = "Caller did not accept the cost, or the query was malformed", body = String)
    )
)]
pub async fn action_results(
    service: DemoService,
    Query(query): Query<ActionResultsQuery>,
) -> Response {
    if query.acceptable {
        return (StatusCode::OK, Json(service.needlessly_consume_resources())).into_response();
    }

    tracing::debug!("Rejected unacceptable resource consumption");
    (StatusCode::BAD_REQUEST, Json(REJECTION_MESSAGE)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Environment};
    use crate::service::RESOURCES_CONSUMED;

    #[tokio::test]
    async fn example_returns_constant() {
        assert_eq!(example().await, EXAMPLE_MESSAGE);
    }

    #[tokio::test]
    async fn demo_returns_service_result() {
        assert_eq!(demo(DemoService::default()).await, RESOURCES_CONSUMED);
    }

    #[tokio::test]
    async fn action_results_branches_on_acceptable() {
        let ok = action_results(
            DemoService::default(),
            Query(ActionResultsQuery { acceptable: true }),
        )
        .await;
        assert_eq!(ok.status(), StatusCode::OK);

        let rejected = action_results(
            DemoService::default(),
            Query(ActionResultsQuery { acceptable: false }),
        )
        .await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_environment() {
        let config = AppConfig {
            environment: Environment::Development,
            ..Default::default()
        };
        let Json(body) = health(State(AppState::new(config))).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.environment, "development");
    }
}
