// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page title resolution.
//!
//! The default source of a link title is the static translated language
//! name (`languages.{locale}`). With the `title` setting on, each
//! candidate page is fetched over HTTP and its `<title>` element used
//! instead; any transport failure, non-success status, or missing title
//! falls back to the static label and is reported as a warning. Fetches
//! are issued sequentially and carry both a `Cache-Control: max-age`
//! directive and a timeout, so a slow page cannot block resolution
//! indefinitely.

use crate::config::Settings;
use crate::diagnostics::Diagnostics;
use crate::i18n;
use regex::Regex;
use std::time::Duration;

/// Source of human-readable titles for candidate links.
///
/// The resolver only sees this trait; tests and embedders can plug in
/// their own source. Any `Fn(&str, &str) -> String` closure qualifies.
pub trait TitleSource {
    /// Title for the page at `path` in `locale`.
    fn page_title(&self, locale: &str, path: &str) -> String;
}

impl<F> TitleSource for F
where
    F: Fn(&str, &str) -> String,
{
    fn page_title(&self, locale: &str, path: &str) -> String {
        self(locale, path)
    }
}

/// Default title source: static translated labels, with the optional
/// live `<title>` fetch layered on top.
pub struct TitleResolver<'a> {
    catalog: &'a serde_json::Value,
    /// Locale the labels are rendered in (the page's active locale, not
    /// the link target's).
    active_locale: &'a str,
    fetch: bool,
    base_url: Option<&'a str>,
    cache_max_age: u64,
    timeout: Duration,
    diagnostics: Diagnostics,
    title_re: Regex,
}

impl<'a> TitleResolver<'a> {
    pub fn new(
        settings: &'a Settings,
        active_locale: &'a str,
        base_url: Option<&'a str>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            catalog: &settings.translation,
            active_locale,
            fetch: settings.title,
            base_url,
            cache_max_age: settings.cache_max_age,
            timeout: Duration::from_secs(settings.fetch_timeout),
            diagnostics,
            title_re: Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap(),
        }
    }

    /// Translated language name for `locale`, degrading to the bare
    /// locale code when the catalog has no entry.
    fn static_label(&self, locale: &str) -> String {
        let key = format!("languages.{locale}");
        let label = i18n::translate(self.catalog, self.active_locale, &key, &[]);
        if label.is_empty() {
            locale.to_string()
        } else {
            label
        }
    }

    fn fetch_title(&self, path: &str) -> Option<String> {
        let base = self.base_url?;
        let url = join_url(base, path);
        let response = ureq::get(&url)
            .timeout(self.timeout)
            .set("Cache-Control", &format!("max-age={}", self.cache_max_age))
            .call()
            .ok()?;
        let body = response.into_string().ok()?;
        let captures = self.title_re.captures(&body)?;
        let title = captures[1].trim().to_string();
        (!title.is_empty()).then_some(title)
    }
}

impl TitleSource for TitleResolver<'_> {
    fn page_title(&self, locale: &str, path: &str) -> String {
        if self.fetch {
            match self.fetch_title(path) {
                Some(title) => return title,
                None => self
                    .diagnostics
                    .warn(&format!("title fetch for {path} fell back to the static label")),
            }
        }
        self.static_label(locale)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
