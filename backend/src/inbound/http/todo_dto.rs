//! Transfer models shared by the HTML and JSON adapters.
//!
//! [`TodoDto`] is both the JSON request/response body and the model behind
//! rendered forms. Entities are projected into it by copying exactly `id`,
//! `title` and `description`.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::Todo;

/// An explicit `null` binds like a missing value so validation can report it.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// To-do entry as seen by clients; `id` is absent before creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoDto {
    /// Persistence identifier; ignored when creating an entry.
    #[schema(example = 1)]
    #[serde(default)]
    pub id: Option<i64>,
    /// Short summary, 1 to 100 characters.
    #[schema(example = "Foo")]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Optional details, at most 500 characters.
    #[schema(example = "Lorem ipsum")]
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id().get()),
            title: todo.title().to_owned(),
            description: todo.description().map(str::to_owned),
        }
    }
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self::from(&todo)
    }
}

/// URL-encoded form body posted by the HTML pages.
///
/// Every field arrives as text; a blank or non-numeric `id` is treated as
/// absent and a blank description as no description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<TodoForm> for TodoDto {
    fn from(form: TodoForm) -> Self {
        let id = form
            .id
            .as_deref()
            .map(str::trim)
            .and_then(|raw| raw.parse::<i64>().ok());
        let description = form.description.filter(|text| !text.is_empty());
        Self {
            id,
            title: form.title,
            description,
        }
    }
}
