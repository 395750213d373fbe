//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Generates technical blog articles with Gemini and serves them by slug",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_articles::ApiDoc)
    ),
    tags(
        (name = "Articles", description = "Article generation and retrieval")
    )
)]
pub struct ApiDoc;
