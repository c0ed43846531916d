//! Static [`MessageSource`] with English and Finnish feedback bundles.
//!
//! Templates use positional `{0}`, `{1}`, ... placeholders. A key missing
//! from the requested bundle resolves against the default locale; a key
//! missing everywhere resolves to the key itself.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::ports::MessageSource;
use crate::domain::{Locale, MessageCode};

const EN: &[(MessageCode, &str)] = &[
    (MessageCode::TodoAdded, "Todo entry: {0} was added."),
    (MessageCode::TodoUpdated, "Todo entry: {0} was updated."),
    (MessageCode::TodoDeleted, "Todo entry: {0} was deleted."),
];

const FI: &[(MessageCode, &str)] = &[
    (MessageCode::TodoAdded, "Tehtävä: {0} lisättiin."),
    (MessageCode::TodoUpdated, "Tehtävä: {0} päivitettiin."),
    (MessageCode::TodoDeleted, "Tehtävä: {0} poistettiin."),
];

type Bundle = HashMap<MessageCode, &'static str>;

/// Compiled-in message catalogue.
#[derive(Debug, Clone)]
pub struct StaticMessageCatalogue {
    bundles: HashMap<String, Bundle>,
    default_locale: Locale,
}

impl StaticMessageCatalogue {
    /// Catalogue with the bundled `en` and `fi` messages.
    pub fn new(default_locale: Locale) -> Self {
        let bundles = [("en", EN), ("fi", FI)]
            .into_iter()
            .map(|(tag, entries)| (tag.to_owned(), entries.iter().copied().collect()))
            .collect();
        Self {
            bundles,
            default_locale,
        }
    }

    fn template(&self, code: MessageCode, locale: &Locale) -> Option<&'static str> {
        let lookup = |tag: &str| self.bundles.get(tag).and_then(|b| b.get(&code)).copied();
        lookup(locale.as_str()).or_else(|| lookup(self.default_locale.as_str()))
    }
}

impl Default for StaticMessageCatalogue {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Substitute `{n}` placeholders in one pass; inserted values are never
/// scanned again. Unknown indices and malformed braces are kept verbatim.
fn format_positional(template: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let param = after[digits..]
            .starts_with('}')
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| params.get(index));
        match param {
            Some(value) => {
                out.push_str(value);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

impl MessageSource for StaticMessageCatalogue {
    fn message(&self, code: MessageCode, params: &[&str], locale: &Locale) -> String {
        match self.template(code, locale) {
            Some(template) => format_positional(template, params),
            None => {
                warn!(key = code.key(), %locale, "message key missing from catalogue");
                code.key().to_owned()
            }
        }
    }

    fn supports(&self, locale: &Locale) -> bool {
        self.bundles.contains_key(locale.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> StaticMessageCatalogue {
        StaticMessageCatalogue::default()
    }

    fn locale(tag: &str) -> Locale {
        tag.parse().expect("valid tag")
    }

    #[rstest]
    #[case(MessageCode::TodoAdded, "Todo entry: Foo was added.")]
    #[case(MessageCode::TodoUpdated, "Todo entry: Foo was updated.")]
    #[case(MessageCode::TodoDeleted, "Todo entry: Foo was deleted.")]
    fn english_messages(
        catalogue: StaticMessageCatalogue,
        #[case] code: MessageCode,
        #[case] expected: &str,
    ) {
        assert_eq!(catalogue.message(code, &["Foo"], &locale("en")), expected);
    }

    #[rstest]
    fn finnish_bundle_is_used_when_requested(catalogue: StaticMessageCatalogue) {
        assert_eq!(
            catalogue.message(MessageCode::TodoAdded, &["Foo"], &locale("fi")),
            "Tehtävä: Foo lisättiin."
        );
    }

    #[rstest]
    fn unknown_locale_falls_back_to_default(catalogue: StaticMessageCatalogue) {
        assert_eq!(
            catalogue.message(MessageCode::TodoDeleted, &["Foo"], &locale("de")),
            "Todo entry: Foo was deleted."
        );
        assert!(!catalogue.supports(&locale("de")));
        assert!(catalogue.supports(&locale("fi")));
    }

    #[rstest]
    fn placeholders_are_substituted_literally(catalogue: StaticMessageCatalogue) {
        assert_eq!(
            catalogue.message(MessageCode::TodoAdded, &["{1} & <b>"], &locale("en")),
            "Todo entry: {1} & <b> was added."
        );
    }

    #[rstest]
    #[case("{0} and {1}", &["{1}", "x"], "{1} and x")]
    #[case("{1} then {0}", &["{0}", "{1}"], "{1} then {0}")]
    #[case("{0} {2} {} {x", &["a"], "a {2} {} {x")]
    fn inserted_values_are_not_rescanned(
        #[case] template: &str,
        #[case] params: &[&str],
        #[case] expected: &str,
    ) {
        assert_eq!(format_positional(template, params), expected);
    }
}
