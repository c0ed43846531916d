//! Domain primitives, services and ports.
//!
//! Types here know nothing about HTTP. Inbound adapters translate requests
//! into [`TodoDraft`] values and call the [`ports::TodoService`] port;
//! outbound adapters implement [`ports::TodoRepository`] and
//! [`ports::MessageSource`].

pub mod error;
pub mod localization;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::localization::{Locale, LocaleParseError, MessageCode};
pub use self::todo::{
    DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH, Todo, TodoDraft, TodoField, TodoId,
    TodoValidationError, TodoViolation,
};
pub use self::todo_service::TodoServiceImpl;
pub use self::trace_id::TraceId;

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
