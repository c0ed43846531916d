//! JSON controller under `/api/todo`.
//!
//! Bodies are [`TodoDto`] values. Validation failures return `400` with a
//! `fieldErrors` list, a missing entry returns `404` with an empty body, and
//! anything else falls through to the domain error envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, delete, get, post, put, web};
use tracing::{debug, warn};

use crate::domain::{Error, TodoId};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todo_dto::TodoDto;
use crate::inbound::http::validation::{FieldErrors, FieldErrorsBody, validate};

/// Failure of a JSON to-do request.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("to-do entry not found")]
    NotFound,
    #[error(transparent)]
    Domain(Error),
}

impl From<Error> for RestError {
    fn from(error: Error) -> Self {
        if error.is_not_found() {
            debug!(message = error.message(), "to-do entry not found");
            Self::NotFound
        } else {
            Self::Domain(error)
        }
    }
}

impl From<FieldErrors> for RestError {
    fn from(errors: FieldErrors) -> Self {
        debug!(%errors, "request body rejected");
        Self::Validation(errors)
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Domain(error) => error.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => HttpResponse::BadRequest().json(errors.clone().into_body()),
            Self::NotFound => HttpResponse::NotFound().finish(),
            Self::Domain(error) => error.error_response(),
        }
    }
}

/// Result alias for JSON to-do handlers.
pub type RestResult<T> = Result<T, RestError>;

/// Malformed JSON bodies surface as the `invalid_request` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        warn!(error = %err, "malformed JSON body");
        let response = Error::invalid_request(format!("invalid JSON body: {err}")).error_response();
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Create an entry. Any client-supplied `id` is ignored.
#[utoipa::path(
    post,
    path = "/api/todo",
    request_body = TodoDto,
    responses(
        (status = 200, description = "Entry created", body = TodoDto),
        (status = 400, description = "Invalid fields", body = FieldErrorsBody),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "addTodo"
)]
#[post("")]
pub async fn add(
    state: web::Data<HttpState>,
    payload: web::Json<TodoDto>,
) -> RestResult<web::Json<TodoDto>> {
    let draft = validate(&payload)?;
    let added = state.todos.add(draft).await?;
    debug!(id = %added.id(), "to-do entry added");
    Ok(web::Json(TodoDto::from(added)))
}

/// List every entry in service order.
#[utoipa::path(
    get,
    path = "/api/todo",
    responses(
        (status = 200, description = "All entries", body = [TodoDto]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("")]
pub async fn find_all(state: web::Data<HttpState>) -> RestResult<web::Json<Vec<TodoDto>>> {
    let todos = state.todos.find_all().await?;
    Ok(web::Json(todos.iter().map(TodoDto::from).collect()))
}

/// Fetch one entry.
#[utoipa::path(
    get,
    path = "/api/todo/{id}",
    params(("id" = i64, Path, description = "Entry identifier")),
    responses(
        (status = 200, description = "Entry", body = TodoDto),
        (status = 404, description = "No such entry; empty body")
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/{id}")]
pub async fn find_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> RestResult<web::Json<TodoDto>> {
    let todo = state.todos.find_by_id(TodoId::new(path.into_inner())).await?;
    Ok(web::Json(TodoDto::from(todo)))
}

/// Update an entry.
///
/// The body `id` names the entry to update; the path id is only used when
/// the body omits one.
#[utoipa::path(
    put,
    path = "/api/todo/{id}",
    params(("id" = i64, Path, description = "Entry identifier")),
    request_body = TodoDto,
    responses(
        (status = 200, description = "Entry updated", body = TodoDto),
        (status = 400, description = "Invalid fields", body = FieldErrorsBody),
        (status = 404, description = "No such entry; empty body")
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<TodoDto>,
) -> RestResult<web::Json<TodoDto>> {
    let draft = validate(&payload)?;
    let path_id = path.into_inner();
    let id = payload.id.unwrap_or(path_id);
    if id != path_id {
        debug!(path_id, body_id = id, "updating entry named by body id");
    }
    let updated = state.todos.update(TodoId::new(id), draft).await?;
    Ok(web::Json(TodoDto::from(updated)))
}

/// Delete an entry, returning its last state.
#[utoipa::path(
    delete,
    path = "/api/todo/{id}",
    params(("id" = i64, Path, description = "Entry identifier")),
    responses(
        (status = 200, description = "Entry deleted", body = TodoDto),
        (status = 404, description = "No such entry; empty body")
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/{id}")]
pub async fn delete_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> RestResult<web::Json<TodoDto>> {
    let deleted = state
        .todos
        .delete_by_id(TodoId::new(path.into_inner()))
        .await?;
    debug!(id = %deleted.id(), "to-do entry deleted");
    Ok(web::Json(TodoDto::from(deleted)))
}

/// The `/api/todo` scope with its JSON configuration.
pub fn scope() -> actix_web::Scope {
    web::scope("/api/todo")
        .app_data(json_config())
        .service(add)
        .service(find_all)
        .service(find_by_id)
        .service(update)
        .service(delete_by_id)
}

#[cfg(test)]
#[path = "todo_rest_tests.rs"]
mod tests;
