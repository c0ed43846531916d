//! HTTP inbound adapter: HTML pages, the JSON API and health probes.

use actix_web::web;

pub mod error;
pub mod error_pages;
pub mod flash;
pub mod health;
pub mod locale;
pub mod schemas;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod todo_dto;
pub mod todo_rest;
pub mod todo_web;
pub mod validation;
pub mod views;

/// Register the HTML pages and error pages.
///
/// These routes read and write flash feedback, so the caller must wrap them
/// in session middleware.
pub fn configure_web(cfg: &mut web::ServiceConfig) {
    cfg.service(error_pages::not_found)
        .service(error_pages::error_page)
        .configure(todo_web::configure);
}

/// Register the JSON API scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(todo_rest::scope());
}
