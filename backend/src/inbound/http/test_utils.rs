//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::Error;
use crate::domain::ports::TodoService;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::views::{Page, ViewRenderer};
use crate::outbound::messages::StaticMessageCatalogue;

/// Session middleware with a fresh key, cookie name `session` and the
/// `Secure` flag disabled for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Renders pages as their JSON model so tests can assert on view names,
/// models and feedback without parsing HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, page: &Page) -> Result<String, Error> {
        serde_json::to_string(page)
            .map_err(|err| Error::internal(format!("failed to serialise page: {err}")))
    }
}

/// Handler state over `todos` with the bundled catalogue and
/// [`JsonViewRenderer`].
pub fn state_with_service(todos: Arc<dyn TodoService>) -> HttpState {
    HttpState::new(HttpStatePorts {
        todos,
        messages: Arc::new(StaticMessageCatalogue::default()),
        views: Arc::new(JsonViewRenderer),
    })
}
