//! OpenAPI document and Swagger UI for the HTTP API.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use foldertree_entity::{File, Folder, FolderChildren};

use crate::dto::HealthResponse;
use crate::error::ApiErrorResponse;
use crate::handlers;

/// Where the Swagger UI is served.
pub const DOCS_PATH: &str = "/api/v1/swagger";

/// Where the raw OpenAPI JSON is served.
pub const OPENAPI_PATH: &str = "/api/v1/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "FolderTree API", description = "Folder and file namespace"),
    paths(
        handlers::folder::list_folders,
        handlers::folder::list_files,
        handlers::folder::list_children,
        handlers::health::health,
    ),
    components(schemas(
        Folder,
        File,
        FolderChildren,
        HealthResponse,
        ApiErrorResponse,
    )),
    tags(
        (name = "Folders", description = "Folder and file listing"),
        (name = "Health", description = "Liveness and store connectivity"),
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it renders.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
