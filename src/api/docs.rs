//! OpenAPI document and Swagger UI

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;

/// Where the generated OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// Where the interactive Swagger UI is served.
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "minimal-api",
        version = "v1",
        description = "Example GET endpoints backed by a request-scoped demo service"
    ),
    paths(
        handlers::health,
        handlers::example,
        handlers::demo,
        handlers::action_results
    ),
    components(schemas(handlers::HealthResponse)),
    tags(
        (name = "demo", description = "Demo endpoints"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Swagger UI bound to the generated document, ready to merge into a router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "minimal-api");
        assert_eq!(doc.info.version, "v1");

        for path in ["/health", "/example", "/demo", "/actionresults"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
