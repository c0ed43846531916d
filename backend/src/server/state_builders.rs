//! Builders wiring outbound adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use todo_backend::domain::TodoServiceImpl;
use todo_backend::inbound::http::state::{HttpState, HttpStatePorts};
use todo_backend::inbound::http::views::HtmlViewRenderer;
use todo_backend::outbound::messages::StaticMessageCatalogue;
use todo_backend::outbound::persistence::InMemoryTodoRepository;

use super::ServerConfig;

/// Handler state over a fresh in-memory store, the bundled message
/// catalogue and the HTML renderer.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryTodoRepository::new());
    let locale = config.default_locale.clone();
    let state = HttpState::new(HttpStatePorts {
        todos: Arc::new(TodoServiceImpl::new(repository)),
        messages: Arc::new(StaticMessageCatalogue::new(locale.clone())),
        views: Arc::new(HtmlViewRenderer),
    })
    .with_default_locale(locale);
    web::Data::new(state)
}
