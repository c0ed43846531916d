//! Directly addressable error pages.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Page, PageModel, View, render_page};

fn show(state: &HttpState, view: View) -> HttpResponse {
    render_page(
        state.views.as_ref(),
        StatusCode::OK,
        &Page::new(view, PageModel::Empty {}),
    )
    .unwrap_or_else(|err| {
        error!(error = %err, view = view.name(), "failed to render error page");
        HttpResponse::InternalServerError().finish()
    })
}

/// Render the not-found page with status 200.
#[get("/error/404")]
pub async fn not_found(state: web::Data<HttpState>) -> HttpResponse {
    show(&state, View::NotFound)
}

/// Render the generic error page with status 200.
#[get("/error/error")]
pub async fn error_page(state: web::Data<HttpState>) -> HttpResponse {
    show(&state, View::Error)
}
