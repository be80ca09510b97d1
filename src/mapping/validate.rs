// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural validation of the user-supplied page-identity mapping.
//!
//! Gates the resolver: a mapping that fails any check is reported and
//! resolution is skipped entirely — no partial navigation is rendered.

use crate::types::{Ident, LanguageMapping, PageTable, RawMapping};
use serde_json::Value;
use std::fmt;

/// Why a mapping was rejected. Checks run in declaration order and the
/// first failure short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingError {
    /// No mapping was configured at all.
    Missing,
    /// The mapping object declares no locales.
    NoLocales,
    /// A locale's page table is empty.
    NoLinks { locale: String },
    /// An ident arrived as a string; idents must be numeric.
    StringIdent {
        locale: String,
        path: String,
        value: String,
    },
    /// An ident is some other non-integer JSON value.
    NonIntegerIdent {
        locale: String,
        path: String,
        value: Value,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::Missing => write!(f, "mapping is missing"),
            MappingError::NoLocales => write!(f, "mapping declares no languages"),
            MappingError::NoLinks { locale } => {
                write!(f, "language ({}) has no links", locale.to_uppercase())
            }
            MappingError::StringIdent {
                locale,
                path,
                value,
            } => write!(
                f,
                "ident ({} -> {} -> \"{}\") must be given as a number, not a string",
                locale.to_uppercase(),
                path,
                value
            ),
            MappingError::NonIntegerIdent {
                locale,
                path,
                value,
            } => write!(
                f,
                "ident ({} -> {} -> {}) must be an integer",
                locale.to_uppercase(),
                path,
                value
            ),
        }
    }
}

impl std::error::Error for MappingError {}

/// Validate a raw mapping and convert it to its typed form.
///
/// Rules, in order: the mapping must be present, declare at least one
/// locale, give every locale at least one path, and type every ident as
/// an integer. String idents are rejected with a message naming the
/// offending locale, path, and value.
pub fn validate(raw: Option<&RawMapping>) -> Result<LanguageMapping, MappingError> {
    let raw = raw.ok_or(MappingError::Missing)?;
    if raw.is_empty() {
        return Err(MappingError::NoLocales);
    }

    let mut mapping = LanguageMapping::new();
    for (locale, table) in raw {
        if table.is_empty() {
            return Err(MappingError::NoLinks {
                locale: locale.clone(),
            });
        }
        let mut pages = PageTable::new();
        for (path, value) in table {
            let ident = match value {
                Value::String(text) => {
                    return Err(MappingError::StringIdent {
                        locale: locale.clone(),
                        path: path.clone(),
                        value: text.clone(),
                    });
                }
                Value::Number(number) => number.as_i64(),
                _ => None,
            };
            match ident {
                Some(ident) => {
                    pages.insert(path.clone(), Ident(ident));
                }
                None => {
                    return Err(MappingError::NonIntegerIdent {
                        locale: locale.clone(),
                        path: path.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        mapping.insert(locale.clone(), pages);
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(mapping: Value) -> RawMapping {
        serde_json::from_value(mapping).unwrap()
    }

    #[test]
    fn missing_mapping_is_rejected() {
        assert_eq!(validate(None), Err(MappingError::Missing));
    }

    #[test]
    fn empty_mapping_is_rejected() {
        let mapping = raw(json!({}));
        assert_eq!(validate(Some(&mapping)), Err(MappingError::NoLocales));
    }

    #[test]
    fn locale_without_links_is_rejected() {
        let mapping = raw(json!({"de": {}, "en": {"/index.html": 100}}));
        let err = validate(Some(&mapping)).unwrap_err();
        assert_eq!(
            err,
            MappingError::NoLinks {
                locale: "de".to_string()
            }
        );
        assert!(err.to_string().contains("DE"));
    }

    #[test]
    fn string_ident_is_rejected_with_full_context() {
        let mapping = raw(json!({"en": {"/index.html": "100"}}));
        let err = validate(Some(&mapping)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("EN"));
        assert!(message.contains("/index.html"));
        assert!(message.contains("100"));
    }

    #[test]
    fn float_ident_is_rejected() {
        let mapping = raw(json!({"en": {"/index.html": 1.5}}));
        assert!(matches!(
            validate(Some(&mapping)),
            Err(MappingError::NonIntegerIdent { .. })
        ));
    }

    #[test]
    fn valid_mapping_converts_to_typed_idents() {
        let mapping = raw(json!({
            "en": {"/index.html": 100, "/contact.html": 110},
            "de": {"/de/index.html": 100}
        }));
        let validated = validate(Some(&mapping)).unwrap();
        assert_eq!(validated["en"]["/contact.html"], Ident(110));
        assert_eq!(validated["de"]["/de/index.html"], Ident(100));
    }
}
