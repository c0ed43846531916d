//! Todo MVC backend: a to-do list served as HTML pages and a JSON API.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] owns the entry
//! model, its validation and the driving/driven ports; [`inbound`] adapts
//! HTTP requests onto those ports; [`outbound`] supplies the in-memory
//! repository and the feedback message catalogue.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
