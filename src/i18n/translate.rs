// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dotted-key translation lookup with default-locale fallback.

use serde_json::Value;

/// Locale used when the active locale has no catalog entry.
pub const FALLBACK_LOCALE: &str = "en";

/// Resolve a dotted translation key against the catalog.
///
/// When the active locale is present, the key's dot-separated segments
/// are traversed one by one; a missing or falsy segment stops traversal
/// and yields the empty string (never a panic). When the locale is
/// unknown, the whole key is looked up FLAT under [`FALLBACK_LOCALE`],
/// else the raw key is returned — dots are deliberately not traversed
/// on this path, and callers rely on that asymmetry.
///
/// Every occurrence of each `{{name}}` token in the result is replaced
/// with the matching placeholder value. Missing placeholders stay in
/// place; the lookup degrades, it does not fail.
pub fn translate(catalog: &Value, locale: &str, key: &str, placeholders: &[(&str, &str)]) -> String {
    let resolved = match catalog.get(locale) {
        Some(subtree) => traverse(subtree, key),
        None => catalog
            .get(FALLBACK_LOCALE)
            .and_then(|tree| tree.get(key))
            .and_then(Value::as_str)
            .unwrap_or(key)
            .to_string(),
    };
    substitute(resolved, placeholders)
}

fn traverse(subtree: &Value, key: &str) -> String {
    let mut node = subtree;
    for segment in key.split('.') {
        match node.get(segment) {
            Some(next) if !is_falsy(next) => node = next,
            _ => return String::new(),
        }
    }
    // A terminal that is still a branch (or some other non-string) has
    // no sensible rendering; treat it like a miss.
    node.as_str().unwrap_or_default().to_string()
}

fn substitute(mut text: String, placeholders: &[(&str, &str)]) -> String {
    for (name, value) in placeholders {
        let token = format!("{{{{{name}}}}}");
        text = text.replace(&token, value);
    }
    text
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::default_catalog;

    #[test]
    fn dotted_lookup_resolves_nested_keys() {
        let catalog = default_catalog();
        assert_eq!(translate(&catalog, "en", "languages.de", &[]), "German");
        assert_eq!(translate(&catalog, "de", "languages.en", &[]), "Englisch");
    }

    #[test]
    fn unknown_locale_falls_back_without_traversing_dots() {
        let catalog = default_catalog();
        // The "en" tree has no flat "languages.de" key, so the raw key
        // comes back unchanged.
        assert_eq!(translate(&catalog, "xx", "languages.de", &[]), "languages.de");
    }

    #[test]
    fn unknown_locale_flat_key_resolves_under_english() {
        let catalog = default_catalog();
        assert_eq!(
            translate(&catalog, "xx", "languageChoice", &[]),
            "Language selection"
        );
    }

    #[test]
    fn placeholders_are_substituted() {
        let catalog = default_catalog();
        assert_eq!(
            translate(&catalog, "en", "languageSwitchText", &[("lang", "German")]),
            "Display this page in German"
        );
    }

    #[test]
    fn repeated_placeholder_tokens_are_all_replaced() {
        let catalog = serde_json::json!({
            "en": { "echo": "{{word}} and {{word}} again" }
        });
        assert_eq!(
            translate(&catalog, "en", "echo", &[("word", "hi")]),
            "hi and hi again"
        );
    }

    #[test]
    fn missing_segment_yields_empty_string() {
        let catalog = default_catalog();
        assert_eq!(translate(&catalog, "en", "languages.zz", &[]), "");
        assert_eq!(translate(&catalog, "en", "no.such.key", &[]), "");
    }

    #[test]
    fn missing_placeholder_leaves_token_in_place() {
        let catalog = default_catalog();
        assert_eq!(
            translate(&catalog, "en", "languageSwitchText", &[]),
            "Display this page in {{lang}}"
        );
    }

    #[test]
    fn branch_terminal_counts_as_a_miss() {
        let catalog = default_catalog();
        assert_eq!(translate(&catalog, "en", "languages", &[]), "");
    }
}
