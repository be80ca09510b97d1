// SPDX-License-Identifier: PMPL-1.0-or-later

//! Effective settings assembly.
//!
//! The caller hands over a partial JSON override object; it is
//! deep-merged over the built-in defaults and deserialized into the
//! typed [`Settings`] struct. Built once at construction, read-only
//! afterwards.

use crate::i18n;
use crate::merge;
use crate::types::RawMapping;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// `Cache-Control: max-age` sent with title fetches, in seconds (24 h).
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86_400;

/// Timeout applied to each title fetch, in seconds. The original had no
/// timeout at all; a slow page must not block the whole resolution.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Effective settings for one switcher instance.
///
/// Field names mirror the configuration keys users write (camelCase in
/// JSON). `mapping` stays optional here — its presence is the first
/// thing the validator checks, and that failure is advisory rather than
/// a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Locale served at the site root (`/`).
    pub default_lang: String,
    /// Render the bare locale code instead of the resolved title.
    pub short_name: bool,
    /// Fetch each candidate page and use its `<title>` element instead
    /// of the static translated language name.
    pub title: bool,
    /// CSS class for the generated list.
    pub list_class: String,
    /// `max-age` directive for title fetches, in seconds.
    pub cache_max_age: u64,
    /// Per-fetch timeout, in seconds.
    pub fetch_timeout: u64,
    /// Translation catalog, merged over the built-in one.
    pub translation: Value,
    /// Page-identity mapping. Required for resolution to run.
    pub mapping: Option<RawMapping>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            short_name: false,
            title: false,
            list_class: "lang-switcher".to_string(),
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT_SECS,
            translation: i18n::default_catalog(),
            mapping: None,
        }
    }
}

impl Settings {
    /// Deep-merge a caller override object over the built-in defaults.
    ///
    /// A partial override keeps everything it does not mention — in
    /// particular, overriding one translation string leaves the rest of
    /// the bundled catalog intact.
    pub fn from_value(overrides: Value) -> Result<Settings> {
        let defaults =
            serde_json::to_value(Settings::default()).context("serializing default settings")?;
        serde_json::from_value(merge::merge(&[defaults, overrides]))
            .context("settings override has a wrongly typed field")
    }

    /// Load settings from a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Settings> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let overrides: Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Settings::from_value(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.default_lang, "en");
        assert!(!settings.short_name);
        assert!(!settings.title);
        assert_eq!(settings.list_class, "lang-switcher");
        assert_eq!(settings.cache_max_age, 86_400);
        assert!(settings.mapping.is_none());
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let settings = Settings::from_value(json!({"defaultLang": "de"})).unwrap();
        assert_eq!(settings.default_lang, "de");
        assert_eq!(settings.list_class, "lang-switcher");
        // The untouched built-in catalog survives the merge.
        assert_eq!(settings.translation["en"]["languages"]["de"], "German");
    }

    #[test]
    fn translation_override_merges_into_catalog() {
        let settings = Settings::from_value(json!({
            "translation": { "en": { "languageChoice": "Pick a language" } }
        }))
        .unwrap();
        assert_eq!(settings.translation["en"]["languageChoice"], "Pick a language");
        assert_eq!(settings.translation["en"]["languages"]["fr"], "French");
        assert_eq!(settings.translation["de"]["languageChoice"], "Sprachauswahl");
    }

    #[test]
    fn mapping_deserializes_from_override() {
        let settings = Settings::from_value(json!({
            "mapping": { "en": { "/index.html": 100 } }
        }))
        .unwrap();
        let mapping = settings.mapping.expect("mapping should be present");
        assert_eq!(mapping["en"]["/index.html"], json!(100));
    }

    #[test]
    fn wrongly_typed_field_is_an_error() {
        assert!(Settings::from_value(json!({"shortName": "yes"})).is_err());
    }
}
