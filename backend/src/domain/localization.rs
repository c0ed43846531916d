//! Locale and message-code primitives for user-facing feedback.

use std::fmt;
use std::str::FromStr;

/// Language a response is rendered in, reduced to its primary subtag.
///
/// # Examples
/// ```
/// use todo_backend::domain::Locale;
///
/// let locale: Locale = "en-GB".parse().expect("valid tag");
/// assert_eq!(locale.as_str(), "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

/// Raised when a language tag has no usable primary subtag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language tag: {tag:?}")]
pub struct LocaleParseError {
    tag: String,
}

impl Locale {
    /// The primary language subtag, lower-cased.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_owned())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        let valid = (2..=8).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(LocaleParseError { tag: s.to_owned() });
        }
        Ok(Self(primary.to_ascii_lowercase()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed catalogue keys for feedback shown after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    TodoAdded,
    TodoUpdated,
    TodoDeleted,
}

impl MessageCode {
    /// Catalogue key for this message.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TodoAdded => "feedback.message.todo.added",
            Self::TodoUpdated => "feedback.message.todo.updated",
            Self::TodoDeleted => "feedback.message.todo.deleted",
        }
    }
}
