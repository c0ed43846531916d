//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on domain ports, so
//! tests can swap in mocks without touching I/O.

use std::sync::Arc;

use crate::domain::Locale;
use crate::domain::ports::{MessageSource, TodoService};
use crate::inbound::http::views::ViewRenderer;

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub todos: Arc<dyn TodoService>,
    pub messages: Arc<dyn MessageSource>,
    pub views: Arc<dyn ViewRenderer>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoService>,
    pub messages: Arc<dyn MessageSource>,
    pub views: Arc<dyn ViewRenderer>,
    /// Locale used when `Accept-Language` names nothing the catalogue has.
    pub default_locale: Locale,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default `en` fallback locale.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use todo_backend::domain::TodoServiceImpl;
    /// use todo_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use todo_backend::inbound::http::views::HtmlViewRenderer;
    /// use todo_backend::outbound::messages::StaticMessageCatalogue;
    /// use todo_backend::outbound::persistence::InMemoryTodoRepository;
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     todos: Arc::new(TodoServiceImpl::new(Arc::new(InMemoryTodoRepository::new()))),
    ///     messages: Arc::new(StaticMessageCatalogue::default()),
    ///     views: Arc::new(HtmlViewRenderer),
    /// });
    /// assert_eq!(state.default_locale.as_str(), "en");
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            todos,
            messages,
            views,
        } = ports;
        Self {
            todos,
            messages,
            views,
            default_locale: Locale::default(),
        }
    }

    /// Override the fallback locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }
}
