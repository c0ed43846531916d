//! To-do entries and the field constraints shared by every adapter.
//!
//! A [`TodoDraft`] is the only way to obtain validated title and description
//! values, so a [`Todo`] can never hold text that breaks the length limits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters allowed in a title.
pub const TITLE_MAX_LENGTH: usize = 100;
/// Maximum number of characters allowed in a description.
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

/// Identifier assigned by persistence when an entry is first stored.
///
/// # Examples
/// ```
/// use todo_backend::domain::TodoId;
///
/// let id = TodoId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Input field that a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoField {
    Title,
    Description,
}

impl TodoField {
    /// Field name as it appears in forms and JSON bodies.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

/// A single broken field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoViolation {
    TitleEmpty,
    TitleTooLong { max: usize },
    DescriptionTooLong { max: usize },
}

impl TodoViolation {
    /// Field the violation is reported against.
    #[must_use]
    pub const fn field(self) -> TodoField {
        match self {
            Self::TitleEmpty | Self::TitleTooLong { .. } => TodoField::Title,
            Self::DescriptionTooLong { .. } => TodoField::Description,
        }
    }
}

impl fmt::Display for TodoViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleEmpty => write!(f, "The title cannot be empty."),
            Self::TitleTooLong { max } => {
                write!(f, "The maximum length of the title is {max} characters.")
            }
            Self::DescriptionTooLong { max } => {
                write!(
                    f,
                    "The maximum length of the description is {max} characters."
                )
            }
        }
    }
}

/// Every violation found while validating a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoValidationError {
    violations: Vec<TodoViolation>,
}

impl TodoValidationError {
    /// Violations in field order, at most one per field.
    #[must_use]
    pub fn violations(&self) -> &[TodoViolation] {
        &self.violations
    }
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for TodoValidationError {}

/// Validated title and description awaiting persistence.
///
/// ## Invariants
/// - `title` is non-blank and at most [`TITLE_MAX_LENGTH`] characters.
/// - `description`, when present, is at most [`DESCRIPTION_MAX_LENGTH`]
///   characters.
///
/// # Examples
/// ```
/// use todo_backend::domain::TodoDraft;
///
/// let draft = TodoDraft::new("Foo", Some("Lorem ipsum".to_owned())).expect("valid draft");
/// assert_eq!(draft.title(), "Foo");
/// assert!(TodoDraft::new("x".repeat(101), None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: String,
    description: Option<String>,
}

impl TodoDraft {
    /// Validate both fields, collecting one violation per offending field.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TodoValidationError> {
        let title = title.into();
        let mut violations = Vec::new();

        if title.trim().is_empty() {
            violations.push(TodoViolation::TitleEmpty);
        } else if title.chars().count() > TITLE_MAX_LENGTH {
            violations.push(TodoViolation::TitleTooLong {
                max: TITLE_MAX_LENGTH,
            });
        }

        if description
            .as_deref()
            .is_some_and(|text| text.chars().count() > DESCRIPTION_MAX_LENGTH)
        {
            violations.push(TodoViolation::DescriptionTooLong {
                max: DESCRIPTION_MAX_LENGTH,
            });
        }

        if violations.is_empty() {
            Ok(Self { title, description })
        } else {
            Err(TodoValidationError { violations })
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Persisted to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: Option<String>,
}

impl Todo {
    /// Bind a validated draft to its persistence identifier.
    #[must_use]
    pub fn new(id: TodoId, draft: TodoDraft) -> Self {
        let TodoDraft { title, description } = draft;
        Self {
            id,
            title,
            description,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
