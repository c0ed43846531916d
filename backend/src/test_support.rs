//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Only compiled for tests or with the `test-support` feature.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::TodoServiceImpl;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure_api, configure_web};
use crate::outbound::persistence::InMemoryTodoRepository;

pub use crate::inbound::http::test_utils::{
    JsonViewRenderer, state_with_service, test_session_middleware,
};

/// Handler state over a real service and an empty in-memory store, with
/// pages rendered as JSON.
pub fn in_memory_state() -> HttpState {
    let repository = Arc::new(InMemoryTodoRepository::new());
    state_with_service(Arc::new(TodoServiceImpl::new(repository)))
}

/// The complete route table over `state`: JSON API plus session-backed pages.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
        .service(
            web::scope("")
                .wrap(test_session_middleware())
                .configure(configure_web),
        )
}
