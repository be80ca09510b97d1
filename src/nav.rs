// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation list assembly.
//!
//! Turns resolved link descriptors into the ordered entry list handed
//! to a rendering layer, with the accessibility metadata each entry
//! needs: `lang`/`hreflang`, a translated "switch to this language"
//! label, and an `aria-current` marker on the active locale. The HTML
//! emitter here is the thin wrapper — all decisions happen in
//! [`assemble`].

use crate::config::Settings;
use crate::i18n;
use crate::types::LinkDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Locale code, used for the `lang` and `hreflang` attributes and
    /// as the per-item class name.
    pub locale: String,
    pub href: String,
    /// Display text: the resolved title, or the locale code under the
    /// `shortName` setting.
    pub text: String,
    /// Resolved title (tooltip).
    pub title: String,
    /// Translated switch phrase, e.g. "Display this page in German".
    pub aria_label: String,
    /// True on the entry matching the active locale (`aria-current`).
    pub current: bool,
}

/// The complete navigation affordance for one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavList {
    /// ARIA role set on the container.
    pub role: String,
    /// Accessible container label, from `languageChoice`.
    pub aria_label: String,
    /// Class for the generated list: `{listClass} page-{locale}`.
    pub list_class: String,
    pub entries: Vec<LinkEntry>,
}

/// Build the ordered navigation list from resolved descriptors.
pub fn assemble(
    links: &BTreeMap<String, LinkDescriptor>,
    settings: &Settings,
    current_locale: &str,
) -> NavList {
    let catalog = &settings.translation;
    let entries = links
        .iter()
        .map(|(locale, link)| {
            let language_name = {
                let name =
                    i18n::translate(catalog, current_locale, &format!("languages.{locale}"), &[]);
                if name.is_empty() {
                    locale.clone()
                } else {
                    name
                }
            };
            LinkEntry {
                locale: locale.clone(),
                href: link.path.clone(),
                text: if settings.short_name {
                    locale.clone()
                } else {
                    link.title.clone()
                },
                title: link.title.clone(),
                aria_label: i18n::translate(
                    catalog,
                    current_locale,
                    "languageSwitchText",
                    &[("lang", &language_name)],
                ),
                current: locale == current_locale,
            }
        })
        .collect();

    NavList {
        role: "navigation".to_string(),
        aria_label: i18n::translate(catalog, current_locale, "languageChoice", &[]),
        list_class: format!("{} page-{}", settings.list_class, current_locale),
        entries,
    }
}

/// Render the list as an HTML `<ul>` markup string.
///
/// The container's `role` and `aria-label` belong on the caller's
/// element; they are exposed on [`NavList`] rather than emitted here.
pub fn to_html(nav: &NavList) -> String {
    let mut html = format!("<ul class=\"{}\">\n", escape(&nav.list_class));
    for entry in &nav.entries {
        let li_class = if entry.current {
            format!("{} active", entry.locale)
        } else {
            entry.locale.clone()
        };
        html.push_str(&format!("  <li class=\"{}\">", escape(&li_class)));
        html.push_str(&format!(
            "<a href=\"{}\" title=\"{}\" lang=\"{}\" hreflang=\"{}\" aria-label=\"{}\" tabindex=\"0\"",
            escape(&entry.href),
            escape(&entry.title),
            escape(&entry.locale),
            escape(&entry.locale),
            escape(&entry.aria_label),
        ));
        if entry.current {
            html.push_str(" aria-current=\"page\"");
        }
        html.push_str(&format!(">{}</a></li>\n", escape(&entry.text)));
    }
    html.push_str("</ul>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
