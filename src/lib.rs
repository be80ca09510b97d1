// SPDX-License-Identifier: PMPL-1.0-or-later

//! langlinks — cross-language page identity resolution for multilingual
//! sites.
//!
//! Given a mapping from locale to page table (path → numeric ident),
//! the crate finds the equivalent URL of the current page in every
//! other configured language and assembles a navigation list with the
//! accessibility metadata a rendering layer needs.
//!
//! CORE PIECES:
//! 1. **merge**: deep configuration merger combining user overrides
//!    with the built-in defaults.
//! 2. **mapping**: structural validation of the page-identity mapping,
//!    then pivot-identity resolution across locales.
//! 3. **i18n**: dotted-key translation lookup with English fallback and
//!    `{{name}}` placeholder substitution.

pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod mapping;
pub mod merge;
pub mod nav;
pub mod switcher;
pub mod title;
pub mod types;

pub use config::Settings;
pub use switcher::LangSwitcher;
