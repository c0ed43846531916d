//! HTTP mapping for domain errors.
//!
//! JSON clients receive the error envelope with a status derived from the
//! error code. HTML pages render their own error views in
//! [`crate::inbound::http::todo_web`] and never reach this mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace internal and unavailable messages with generic text, keeping the
/// trace identifier for correlation.
pub(crate) fn redacted(error: &Error) -> Error {
    let replacement = match error.code() {
        ErrorCode::InternalError => Error::internal("Internal server error"),
        ErrorCode::ServiceUnavailable => Error::service_unavailable("Service unavailable"),
        _ => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => replacement.with_trace_id(id.to_owned()),
        None => replacement,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redacted(self))
    }
}

#[cfg(test)]
mod tests;
