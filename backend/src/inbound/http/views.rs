//! View models and rendering for the HTML adapter.
//!
//! Handlers decide *which* [`View`] to show and with what [`PageModel`];
//! a [`ViewRenderer`] turns that into a response body. Templating stays
//! behind the port so handler tests can assert on the model directly.

use std::fmt::Write as _;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::Error;
use crate::inbound::http::todo_dto::TodoDto;
use crate::inbound::http::validation::{FieldError, FieldErrors};

/// Logical view names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    #[serde(rename = "todo/add")]
    TodoAdd,
    #[serde(rename = "todo/list")]
    TodoList,
    #[serde(rename = "todo/update")]
    TodoUpdate,
    #[serde(rename = "todo/view")]
    TodoView,
    #[serde(rename = "error/404")]
    NotFound,
    #[serde(rename = "error/error")]
    Error,
}

impl View {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TodoAdd => "todo/add",
            Self::TodoList => "todo/list",
            Self::TodoUpdate => "todo/update",
            Self::TodoView => "todo/view",
            Self::NotFound => "error/404",
            Self::Error => "error/error",
        }
    }
}

/// Data a view is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageModel {
    Form {
        todo: TodoDto,
        #[serde(rename = "fieldErrors")]
        field_errors: Vec<FieldError>,
    },
    List {
        todos: Vec<TodoDto>,
    },
    Detail {
        todo: TodoDto,
    },
    Empty {},
}

impl PageModel {
    /// Form model carrying the submitted values and any rejected fields.
    pub fn form(todo: TodoDto, errors: FieldErrors) -> Self {
        Self::Form {
            todo,
            field_errors: errors.iter().cloned().collect(),
        }
    }
}

/// A view together with its model and the pending flash message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub view: View,
    pub feedback_message: Option<String>,
    pub model: PageModel,
}

impl Page {
    pub fn new(view: View, model: PageModel) -> Self {
        Self {
            view,
            feedback_message: None,
            model,
        }
    }

    #[must_use]
    pub fn with_feedback(mut self, message: Option<String>) -> Self {
        self.feedback_message = message;
        self
    }
}

/// Port turning a [`Page`] into a response body.
pub trait ViewRenderer: Send + Sync {
    /// `Content-Type` of rendered bodies.
    fn content_type(&self) -> &'static str;

    fn render(&self, page: &Page) -> Result<String, Error>;
}

/// Render `page` through `renderer` into a response with `status`.
pub fn render_page(
    renderer: &dyn ViewRenderer,
    status: StatusCode,
    page: &Page,
) -> Result<HttpResponse, Error> {
    let body = renderer.render(page)?;
    Ok(HttpResponse::build(status)
        .content_type(renderer.content_type())
        .body(body))
}

/// Minimal server-side HTML renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlViewRenderer;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn write_form(
    out: &mut String,
    action: &str,
    todo: &TodoDto,
    errors: &[FieldError],
) -> std::fmt::Result {
    let error_for = |path: &str| {
        errors
            .iter()
            .find(|error| error.path == path)
            .map(|error| format!("<p class=\"error\" id=\"{path}-error\">{}</p>", escape(&error.message)))
            .unwrap_or_default()
    };
    writeln!(out, "<form method=\"post\" action=\"{action}\">")?;
    if let Some(id) = todo.id {
        writeln!(out, "<input type=\"hidden\" name=\"id\" value=\"{id}\">")?;
    }
    writeln!(
        out,
        "<label>Title <input name=\"title\" maxlength=\"100\" value=\"{}\"></label>{}",
        escape(&todo.title),
        error_for("title")
    )?;
    writeln!(
        out,
        "<label>Description <textarea name=\"description\" maxlength=\"500\">{}</textarea></label>{}",
        escape(todo.description.as_deref().unwrap_or_default()),
        error_for("description")
    )?;
    writeln!(out, "<button type=\"submit\">Save</button>\n</form>")
}

fn write_body(out: &mut String, page: &Page) -> std::fmt::Result {
    match (&page.view, &page.model) {
        (View::TodoAdd, PageModel::Form { todo, field_errors }) => {
            writeln!(out, "<h1>Add to-do entry</h1>")?;
            write_form(out, "/todo/add", todo, field_errors)
        }
        (View::TodoUpdate, PageModel::Form { todo, field_errors }) => {
            writeln!(out, "<h1>Update to-do entry</h1>")?;
            write_form(out, "/todo/update", todo, field_errors)
        }
        (View::TodoList, PageModel::List { todos }) => {
            writeln!(out, "<h1>To-do entries</h1>")?;
            if todos.is_empty() {
                writeln!(out, "<p>No to-do entries found.</p>")?;
            }
            writeln!(out, "<ul>")?;
            for todo in todos {
                let id = todo.id.unwrap_or_default();
                writeln!(
                    out,
                    "<li class=\"todo\"><a href=\"/todo/{id}\">{}</a></li>",
                    escape(&todo.title)
                )?;
            }
            writeln!(out, "</ul>\n<a href=\"/todo/add\">Add to-do entry</a>")
        }
        (View::TodoView, PageModel::Detail { todo }) => {
            let id = todo.id.unwrap_or_default();
            writeln!(out, "<h1>{}</h1>", escape(&todo.title))?;
            writeln!(
                out,
                "<p>{}</p>",
                escape(todo.description.as_deref().unwrap_or_default())
            )?;
            writeln!(
                out,
                "<a href=\"/todo/update/{id}\">Update</a> <a href=\"/todo/delete/{id}\">Delete</a> <a href=\"/\">Back</a>"
            )
        }
        (View::NotFound, _) => writeln!(
            out,
            "<h1>Not found</h1>\n<p>The requested to-do entry was not found.</p>\n<a href=\"/\">Back</a>"
        ),
        _ => writeln!(
            out,
            "<h1>Error</h1>\n<p>An unexpected error occurred.</p>\n<a href=\"/\">Back</a>"
        ),
    }
}

impl ViewRenderer for HtmlViewRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, page: &Page) -> Result<String, Error> {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Todo</title></head>\n<body>\n");
        if let Some(message) = &page.feedback_message {
            writeln!(out, "<div class=\"feedback\">{}</div>", escape(message))
                .map_err(|err| Error::internal(format!("failed to render page: {err}")))?;
        }
        write_body(&mut out, page)
            .map_err(|err| Error::internal(format!("failed to render {}: {err}", page.view.name())))?;
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn dto(id: i64, title: &str) -> TodoDto {
        TodoDto {
            id: Some(id),
            title: title.to_owned(),
            description: None,
        }
    }

    #[rstest]
    fn list_renders_one_item_per_entry() {
        let page = Page::new(
            View::TodoList,
            PageModel::List {
                todos: vec![dto(1, "a"), dto(2, "b")],
            },
        );
        let html = HtmlViewRenderer.render(&page).expect("renders");
        assert_eq!(html.matches("<li class=\"todo\">").count(), 2);
        assert!(html.contains("href=\"/todo/2\""));
    }

    #[rstest]
    fn user_text_is_escaped() {
        let page = Page::new(
            View::TodoView,
            PageModel::Detail {
                todo: dto(1, "<script>alert('x')</script>"),
            },
        )
        .with_feedback(Some("Todo entry: <b> was added.".to_owned()));
        let html = HtmlViewRenderer.render(&page).expect("renders");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Todo entry: &lt;b&gt; was added."));
    }

    #[rstest]
    fn form_shows_field_errors() {
        let errors = crate::inbound::http::validation::validate(&TodoDto::default())
            .expect_err("empty title");
        let page = Page::new(View::TodoAdd, PageModel::form(TodoDto::default(), errors));
        let html = HtmlViewRenderer.render(&page).expect("renders");
        assert!(html.contains("id=\"title-error\">The title cannot be empty.</p>"));
        assert!(html.contains("action=\"/todo/add\""));
    }

    #[rstest]
    fn page_serialises_view_name_and_model() {
        let page = Page::new(View::TodoView, PageModel::Detail { todo: dto(1, "a") });
        assert_eq!(
            serde_json::to_value(page).expect("serialises"),
            json!({
                "view": "todo/view",
                "feedbackMessage": null,
                "model": { "todo": { "id": 1, "title": "a", "description": null } },
            })
        );
    }

    #[rstest]
    #[case(View::NotFound, "error/404")]
    #[case(View::Error, "error/error")]
    fn error_views_have_stable_names(#[case] view: View, #[case] expected: &str) {
        assert_eq!(view.name(), expected);
        assert_eq!(serde_json::to_value(view).expect("serialises"), json!(expected));
    }
}
