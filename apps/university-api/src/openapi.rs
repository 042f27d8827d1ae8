//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "University API",
        version = "0.1.0",
        description = "University records in MongoDB with change events on NATS",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/universities", api = domain_universities::ApiDoc)
    )
)]
pub struct ApiDoc;
