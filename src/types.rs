// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for langlinks.
//!
//! The mapping vocabulary follows the two-stage shape of the pipeline:
//! a [`RawMapping`] arrives straight from user configuration with idents
//! as arbitrary JSON, and the validator turns it into a typed
//! [`LanguageMapping`] before resolution runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity token linking equivalent pages across locales.
///
/// Two page paths in different locales' tables that carry the same ident
/// are the same logical page. Idents are numeric by contract; string
/// idents are rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident(pub i64);

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page path to ident, for one locale.
pub type PageTable = BTreeMap<String, Ident>;

/// Validated locale to page-table mapping.
///
/// `BTreeMap` keeps iteration deterministic, which pins the documented
/// tie-break when one table carries the same ident twice (last path in
/// order wins).
pub type LanguageMapping = BTreeMap<String, PageTable>;

/// Mapping as deserialized from user configuration, before validation.
pub type RawMapping = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

/// Resolved navigation target for one locale.
///
/// Produced fresh on every resolution pass; starts out as the fallback
/// descriptor and is overwritten when a pivot match is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub path: String,
    pub title: String,
}

impl LinkDescriptor {
    /// Default descriptor: `/` for the default locale, `/{locale}/`
    /// otherwise, with the locale code standing in as the title.
    pub fn fallback(locale: &str, default_locale: &str) -> Self {
        let path = if locale == default_locale {
            "/".to_string()
        } else {
            format!("/{locale}/")
        };
        Self {
            path,
            title: locale.to_string(),
        }
    }
}
