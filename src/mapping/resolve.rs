// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cross-locale page resolution via pivot identity.
//!
//! The current page's ident (found by exact path match in the active
//! locale's table) is the pivot; every other locale's table is scanned
//! for the same ident to find the equivalent page. The caller's mapping
//! is never mutated, so repeated resolution passes are safe.

use crate::title::TitleSource;
use crate::types::{LanguageMapping, LinkDescriptor};
use std::collections::BTreeMap;

/// Resolve the equivalent page in every configured locale.
///
/// Returns exactly one [`LinkDescriptor`] per locale in the mapping.
/// Locales without a pivot match keep their fallback path (`/` for the
/// default locale, `/{locale}/` otherwise) and their locale code as
/// title. When one table carries the pivot ident more than once, the
/// last path in order wins — a documented tie-break, not an error.
pub fn resolve(
    mapping: &LanguageMapping,
    current_locale: &str,
    current_path: &str,
    default_locale: &str,
    titles: &dyn TitleSource,
) -> BTreeMap<String, LinkDescriptor> {
    let mut links: BTreeMap<String, LinkDescriptor> = mapping
        .keys()
        .map(|locale| {
            (
                locale.clone(),
                LinkDescriptor::fallback(locale, default_locale),
            )
        })
        .collect();

    // Exact path match in the active locale establishes the pivot.
    let pivot = mapping
        .get(current_locale)
        .and_then(|table| table.get(current_path))
        .copied();

    let Some(pivot) = pivot else {
        // No pivot: every locale stays on its fallback descriptor.
        return links;
    };

    if let Some(link) = links.get_mut(current_locale) {
        link.path = current_path.to_string();
        link.title = titles.page_title(current_locale, current_path);
    }

    for (locale, table) in mapping {
        if locale == current_locale {
            continue;
        }
        for (path, ident) in table {
            if *ident == pivot {
                links.insert(
                    locale.clone(),
                    LinkDescriptor {
                        path: path.clone(),
                        title: titles.page_title(locale, path),
                    },
                );
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::validate;
    use crate::types::RawMapping;
    use serde_json::json;

    fn mapping() -> LanguageMapping {
        let raw: RawMapping = serde_json::from_value(json!({
            "en": {"/index.html": 100, "/contact.html": 110},
            "de": {"/de/index.html": 100, "/de/kontakt.html": 110},
            "fr": {"/fr/index.html": 100}
        }))
        .unwrap();
        validate(Some(&raw)).unwrap()
    }

    fn code_titles(locale: &str, _path: &str) -> String {
        locale.to_string()
    }

    #[test]
    fn returns_one_descriptor_per_locale() {
        let links = resolve(&mapping(), "en", "/contact.html", "en", &code_titles);
        assert_eq!(links.len(), 3);
        assert!(links.contains_key("en"));
        assert!(links.contains_key("de"));
        assert!(links.contains_key("fr"));
    }

    #[test]
    fn pivot_match_resolves_equivalent_paths() {
        let links = resolve(&mapping(), "en", "/contact.html", "en", &code_titles);
        assert_eq!(links["en"].path, "/contact.html");
        assert_eq!(links["de"].path, "/de/kontakt.html");
        // fr has no entry with ident 110; it keeps its fallback.
        assert_eq!(links["fr"].path, "/fr/");
    }

    #[test]
    fn resolution_round_trips_from_any_linked_page() {
        let mapping = mapping();
        let from_en = resolve(&mapping, "en", "/index.html", "en", &code_titles);
        let from_de = resolve(&mapping, "de", "/de/index.html", "en", &code_titles);
        assert_eq!(from_en["de"].path, "/de/index.html");
        assert_eq!(from_de["en"].path, "/index.html");
        assert_eq!(from_en["fr"].path, from_de["fr"].path);
    }

    #[test]
    fn unmatched_path_falls_back_everywhere() {
        let links = resolve(&mapping(), "en", "/missing.html", "en", &code_titles);
        assert_eq!(links["en"].path, "/");
        assert_eq!(links["de"].path, "/de/");
        assert_eq!(links["fr"].path, "/fr/");
        assert_eq!(links["de"].title, "de");
    }

    #[test]
    fn current_locale_absent_from_mapping_yields_fallbacks() {
        let links = resolve(&mapping(), "pl", "/contact.html", "en", &code_titles);
        assert_eq!(links.len(), 3);
        assert!(!links.contains_key("pl"));
        assert_eq!(links["de"].path, "/de/");
    }

    #[test]
    fn duplicate_idents_resolve_to_last_path_in_order() {
        let raw: RawMapping = serde_json::from_value(json!({
            "en": {"/a.html": 1},
            "de": {"/de/x.html": 1, "/de/y.html": 1}
        }))
        .unwrap();
        let mapping = validate(Some(&raw)).unwrap();
        let links = resolve(&mapping, "en", "/a.html", "en", &code_titles);
        assert_eq!(links["de"].path, "/de/y.html");
    }

    #[test]
    fn caller_mapping_is_untouched_across_passes() {
        let mapping = mapping();
        let before = mapping.clone();
        let first = resolve(&mapping, "en", "/contact.html", "en", &code_titles);
        let second = resolve(&mapping, "en", "/contact.html", "en", &code_titles);
        assert_eq!(mapping, before);
        assert_eq!(first, second);
    }

    #[test]
    fn titles_come_from_the_title_source() {
        let fancy = |locale: &str, path: &str| format!("{locale}:{path}");
        let links = resolve(&mapping(), "en", "/contact.html", "en", &fancy);
        assert_eq!(links["de"].title, "de:/de/kontakt.html");
        // Fallback descriptors never consult the title source.
        assert_eq!(links["fr"].title, "fr");
    }
}
