//! Port resolving localized feedback messages.

use crate::domain::{Locale, MessageCode};

/// Catalogue of user-facing messages keyed by [`MessageCode`].
pub trait MessageSource: Send + Sync {
    /// Resolve `code` for `locale`, substituting `{0}`, `{1}`, ... with
    /// `params`. Locales without a bundle fall back to the default one.
    fn message(&self, code: MessageCode, params: &[&str], locale: &Locale) -> String;

    /// Whether a bundle exists for `locale`.
    fn supports(&self, locale: &Locale) -> bool;
}
