// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for langlinks.
//!
//! Provides the bundled translation catalog and the dotted-key lookup
//! used for navigation labels and accessibility phrases.
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"languageChoice"`,
//! `"languages.de"`. Lookups under a known locale traverse the dots;
//! an unknown locale falls back to a flat lookup under English, and a
//! key missing everywhere comes back as-is (fail-open, never panics).
//! `{{name}}` placeholder tokens are substituted after resolution.
//!
//! The catalog is a JSON tree rather than static tables because user
//! configuration may extend or override any part of it through the deep
//! merger before lookups happen.

mod catalog;
mod translate;

pub use catalog::{default_catalog, BUILT_IN_LOCALES};
pub use translate::{translate, FALLBACK_LOCALE};
