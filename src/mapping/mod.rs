// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page-identity mapping: structural validation and cross-locale
//! resolution. The validator gates the resolver — a rejected mapping is
//! reported and never resolved.

mod resolve;
mod validate;

pub use resolve::resolve;
pub use validate::{validate, MappingError};
