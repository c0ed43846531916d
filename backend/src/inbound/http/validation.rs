//! Field validation shared by the HTML and JSON adapters.
//!
//! Both adapters call [`validate`] before touching the service, so an invalid
//! body never reaches it. Violations are reported per field, in field order,
//! with fixed English messages.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{TodoDraft, TodoValidationError};
use crate::inbound::http::todo_dto::TodoDto;

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field.
    #[schema(example = "title")]
    pub path: String,
    /// Human-readable reason.
    #[schema(example = "The maximum length of the title is 100 characters.")]
    pub message: String,
}

/// All rejected fields of one request, each reported once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message reported for `path`, if that field was rejected.
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.path == path)
            .map(|error| error.message.as_str())
    }

    /// JSON body returned by the API for a rejected request.
    pub fn into_body(self) -> FieldErrorsBody {
        FieldErrorsBody {
            field_errors: self.0,
        }
    }
}

impl From<TodoValidationError> for FieldErrors {
    fn from(error: TodoValidationError) -> Self {
        Self(
            error
                .violations()
                .iter()
                .map(|violation| FieldError {
                    path: violation.field().path().to_owned(),
                    message: violation.to_string(),
                })
                .collect(),
        )
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let paths: Vec<_> = self.0.iter().map(|error| error.path.as_str()).collect();
        write!(f, "invalid fields: {}", paths.join(", "))
    }
}

/// `400 Bad Request` body listing rejected fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorsBody {
    pub field_errors: Vec<FieldError>,
}

/// Validate a transfer model, producing a draft the service accepts.
///
/// # Examples
/// ```
/// use todo_backend::inbound::http::todo_dto::TodoDto;
/// use todo_backend::inbound::http::validation::validate;
///
/// let dto = TodoDto { id: None, title: "x".repeat(101), description: None };
/// let errors = validate(&dto).expect_err("title too long");
/// assert_eq!(
///     errors.message_for("title"),
///     Some("The maximum length of the title is 100 characters.")
/// );
/// ```
pub fn validate(dto: &TodoDto) -> Result<TodoDraft, FieldErrors> {
    TodoDraft::new(dto.title.clone(), dto.description.clone()).map_err(FieldErrors::from)
}
