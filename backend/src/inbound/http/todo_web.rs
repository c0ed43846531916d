//! HTML controller: form pages, redirects and flash feedback.
//!
//! ```text
//! GET  /                    list
//! GET  /todo/add            empty add form
//! POST /todo/add            create, redirect to /todo/{id}
//! GET  /todo/{id}           detail
//! GET  /todo/update/{id}    prefilled update form
//! POST /todo/update         update, redirect to /todo/{id}
//! GET  /todo/delete/{id}    delete, redirect to /
//! ```
//!
//! Invalid submissions re-render their form with field errors and never reach
//! the service. A missing entry renders `error/404` with status 404; any other
//! failure renders `error/error` with status 500.

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, post, web};
use tracing::{debug, error, warn};

use crate::domain::{Error, Locale, MessageCode, TodoId};
use crate::inbound::http::flash::FlashMessages;
use crate::inbound::http::locale::RequestLocale;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todo_dto::{TodoDto, TodoForm};
use crate::inbound::http::validation::{FieldErrors, validate};
use crate::inbound::http::views::{Page, PageModel, View, render_page};

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_owned()))
        .finish()
}

fn render(state: &HttpState, page: &Page) -> Result<HttpResponse, Error> {
    render_page(state.views.as_ref(), StatusCode::OK, page)
}

fn form_page(view: View, todo: TodoDto, errors: FieldErrors) -> Page {
    Page::new(view, PageModel::form(todo, errors))
}

/// Path ids that are not integers address nothing.
fn parse_id(raw: &str) -> Result<TodoId, Error> {
    raw.trim()
        .parse::<i64>()
        .map(TodoId::new)
        .map_err(|_| Error::not_found(format!("No to-do entry found with id: {raw}")))
}

fn error_page(state: &HttpState, failure: &Error) -> HttpResponse {
    let (status, view) = if failure.is_not_found() {
        warn!(message = failure.message(), "rendering not-found page");
        (StatusCode::NOT_FOUND, View::NotFound)
    } else {
        error!(code = ?failure.code(), message = failure.message(), "rendering error page");
        (StatusCode::INTERNAL_SERVER_ERROR, View::Error)
    };
    render_page(state.views.as_ref(), status, &Page::new(view, PageModel::Empty {}))
        .unwrap_or_else(|render_error| {
            error!(error = %render_error, "failed to render error page");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal server error")
        })
}

fn respond(state: &HttpState, result: Result<HttpResponse, Error>) -> HttpResponse {
    result.unwrap_or_else(|failure| error_page(state, &failure))
}

fn feedback(state: &HttpState, code: MessageCode, title: &str, locale: &Locale) -> String {
    state.messages.message(code, &[title], locale)
}

async fn list_page(state: &HttpState, flash: &FlashMessages) -> Result<HttpResponse, Error> {
    let todos = state.todos.find_all().await?;
    debug!(count = todos.len(), "rendering to-do list");
    let page = Page::new(
        View::TodoList,
        PageModel::List {
            todos: todos.iter().map(TodoDto::from).collect(),
        },
    )
    .with_feedback(flash.take_feedback());
    render(state, &page)
}

/// Render every entry in service order.
#[get("/")]
pub async fn find_all(state: web::Data<HttpState>, flash: FlashMessages) -> HttpResponse {
    respond(&state, list_page(&state, &flash).await)
}

/// Render an empty add form.
#[get("/todo/add")]
pub async fn show_add_form(state: web::Data<HttpState>, flash: FlashMessages) -> HttpResponse {
    let page = form_page(View::TodoAdd, TodoDto::default(), FieldErrors::default())
        .with_feedback(flash.take_feedback());
    respond(&state, render(&state, &page))
}

async fn add_entry(
    state: &HttpState,
    flash: &FlashMessages,
    locale: &Locale,
    form: TodoForm,
) -> Result<HttpResponse, Error> {
    let mut dto = TodoDto::from(form);
    // Identifiers are assigned by persistence only.
    dto.id = None;

    let draft = match validate(&dto) {
        Ok(draft) => draft,
        Err(errors) => {
            debug!(%errors, "add form rejected");
            return render(state, &form_page(View::TodoAdd, dto, errors));
        }
    };

    let added = state.todos.add(draft).await?;
    flash.push_feedback(feedback(state, MessageCode::TodoAdded, added.title(), locale))?;
    debug!(id = %added.id(), "to-do entry added");
    Ok(redirect(&format!("/todo/{}", added.id())))
}

/// Create an entry from the add form.
#[post("/todo/add")]
pub async fn add(
    state: web::Data<HttpState>,
    flash: FlashMessages,
    locale: RequestLocale,
    form: web::Form<TodoForm>,
) -> HttpResponse {
    respond(
        &state,
        add_entry(&state, &flash, locale.locale(), form.into_inner()).await,
    )
}

async fn delete_entry(
    state: &HttpState,
    flash: &FlashMessages,
    locale: &Locale,
    raw_id: &str,
) -> Result<HttpResponse, Error> {
    let id = parse_id(raw_id)?;
    let deleted = state.todos.delete_by_id(id).await?;
    flash.push_feedback(feedback(state, MessageCode::TodoDeleted, deleted.title(), locale))?;
    debug!(%id, "to-do entry deleted");
    Ok(redirect("/"))
}

/// Delete an entry and return to the list.
#[get("/todo/delete/{id}")]
pub async fn delete_by_id(
    state: web::Data<HttpState>,
    flash: FlashMessages,
    locale: RequestLocale,
    path: web::Path<String>,
) -> HttpResponse {
    respond(
        &state,
        delete_entry(&state, &flash, locale.locale(), &path).await,
    )
}

async fn detail_page(
    state: &HttpState,
    flash: &FlashMessages,
    raw_id: &str,
) -> Result<HttpResponse, Error> {
    let todo = state.todos.find_by_id(parse_id(raw_id)?).await?;
    let page = Page::new(
        View::TodoView,
        PageModel::Detail {
            todo: TodoDto::from(&todo),
        },
    )
    .with_feedback(flash.take_feedback());
    render(state, &page)
}

/// Render one entry.
#[get("/todo/{id}")]
pub async fn find_by_id(
    state: web::Data<HttpState>,
    flash: FlashMessages,
    path: web::Path<String>,
) -> HttpResponse {
    respond(&state, detail_page(&state, &flash, &path).await)
}

async fn update_form_page(
    state: &HttpState,
    flash: &FlashMessages,
    raw_id: &str,
) -> Result<HttpResponse, Error> {
    let todo = state.todos.find_by_id(parse_id(raw_id)?).await?;
    let page = form_page(View::TodoUpdate, TodoDto::from(&todo), FieldErrors::default())
        .with_feedback(flash.take_feedback());
    render(state, &page)
}

/// Render the update form prefilled from the stored entry.
#[get("/todo/update/{id}")]
pub async fn show_update_form(
    state: web::Data<HttpState>,
    flash: FlashMessages,
    path: web::Path<String>,
) -> HttpResponse {
    respond(&state, update_form_page(&state, &flash, &path).await)
}

async fn update_entry(
    state: &HttpState,
    flash: &FlashMessages,
    locale: &Locale,
    form: TodoForm,
) -> Result<HttpResponse, Error> {
    let dto = TodoDto::from(form);
    let draft = match validate(&dto) {
        Ok(draft) => draft,
        Err(errors) => {
            debug!(%errors, "update form rejected");
            return render(state, &form_page(View::TodoUpdate, dto, errors));
        }
    };

    let id = dto
        .id
        .map(TodoId::new)
        .ok_or_else(|| Error::not_found("No to-do entry found without an id"))?;
    let updated = state.todos.update(id, draft).await?;
    flash.push_feedback(feedback(
        state,
        MessageCode::TodoUpdated,
        updated.title(),
        locale,
    ))?;
    debug!(%id, "to-do entry updated");
    Ok(redirect(&format!("/todo/{}", updated.id())))
}

/// Apply the update form.
#[post("/todo/update")]
pub async fn update(
    state: web::Data<HttpState>,
    flash: FlashMessages,
    locale: RequestLocale,
    form: web::Form<TodoForm>,
) -> HttpResponse {
    respond(
        &state,
        update_entry(&state, &flash, locale.locale(), form.into_inner()).await,
    )
}

/// Register the HTML routes. `/todo/add` precedes `/todo/{id}` so the
/// literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all)
        .service(show_add_form)
        .service(add)
        .service(show_update_form)
        .service(update)
        .service(delete_by_id)
        .service(find_by_id);
}

#[cfg(test)]
#[path = "todo_web_tests.rs"]
mod tests;
