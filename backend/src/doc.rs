//! OpenAPI document for the JSON API and health probes.
//!
//! The HTML pages are not part of the document. Swagger UI serves it in
//! debug builds, and the `openapi-dump` binary prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::todo_dto::TodoDto;
use crate::inbound::http::validation::{FieldError, FieldErrorsBody};

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "JSON interface for managing to-do entries, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todo_rest::add,
        crate::inbound::http::todo_rest::find_all,
        crate::inbound::http::todo_rest::find_by_id,
        crate::inbound::http::todo_rest::update,
        crate::inbound::http::todo_rest::delete_by_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(TodoDto, FieldError, FieldErrorsBody, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "todos", description = "Create, read, update and delete to-do entries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
