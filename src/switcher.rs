// SPDX-License-Identifier: PMPL-1.0-or-later

//! Orchestration of one resolution pass.
//!
//! A [`LangSwitcher`] owns the effective settings built at construction
//! and nothing else; every call to [`LangSwitcher::run`] validates,
//! resolves, and assembles a fresh navigation list. Configuration
//! errors are advisory: they are reported through the diagnostics
//! channel and yield no navigation, leaving the host untouched.

use crate::config::Settings;
use crate::diagnostics::Diagnostics;
use crate::mapping::{self, MappingError};
use crate::nav::{self, NavList};
use crate::title::TitleResolver;
use crate::types::LinkDescriptor;
use std::collections::BTreeMap;

pub const NAME: &str = "langlinks";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct LangSwitcher {
    settings: Settings,
    lang: String,
    path: String,
    base_url: Option<String>,
    diagnostics: Diagnostics,
}

impl LangSwitcher {
    /// Build a switcher for the page at `path`, active in `lang`.
    ///
    /// `lang` is normalized the way HTML `lang` attributes arrive in
    /// the wild: region subtags are cut (`de-AT` becomes `de`) and the
    /// result is lowercased.
    pub fn new(settings: Settings, lang: &str, path: &str) -> Self {
        Self {
            settings,
            lang: normalize_locale(lang),
            path: path.to_string(),
            base_url: None,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Base URL that site-relative paths are joined against when the
    /// title fetch is enabled. Without one, fetches are skipped and the
    /// static labels are used.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Silence the diagnostics channel.
    pub fn quiet(mut self) -> Self {
        self.diagnostics = Diagnostics::new(true);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Resolve the equivalent page in every configured locale.
    ///
    /// Fails only for configuration errors; lookup misses degrade to
    /// fallback descriptors inside the result.
    pub fn resolve_links(&self) -> Result<BTreeMap<String, LinkDescriptor>, MappingError> {
        let validated = mapping::validate(self.settings.mapping.as_ref())?;
        let titles = TitleResolver::new(
            &self.settings,
            &self.lang,
            self.base_url.as_deref(),
            self.diagnostics,
        );
        Ok(mapping::resolve(
            &validated,
            &self.lang,
            &self.path,
            &self.settings.default_lang,
            &titles,
        ))
    }

    /// Full pass: validate, resolve, assemble the navigation list.
    ///
    /// Returns `None` when the mapping fails validation; the failure is
    /// reported as an advisory diagnostic and nothing is rendered.
    pub fn run(&self) -> Option<NavList> {
        let links = match self.resolve_links() {
            Ok(links) => links,
            Err(err) => {
                self.diagnostics.error(&err.to_string());
                return None;
            }
        };
        let nav = nav::assemble(&links, &self.settings, &self.lang);
        self.diagnostics
            .success(&format!("{NAME} {VERSION} ran successfully"));
        Some(nav)
    }
}

/// Cut region subtags and lowercase: `de-AT` and `de_AT` become `de`.
pub fn normalize_locale(raw: &str) -> String {
    raw.split(['-', '_'])
        .next()
        .unwrap_or(raw)
        .to_ascii_lowercase()
}
