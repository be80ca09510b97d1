// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deep configuration merge.
//!
//! Combines any number of JSON object sources into one effective object,
//! processing sources in argument order so later scalars overwrite
//! earlier ones. Nested objects merge key by key; arrays and primitives
//! replace wholesale. This is how a partial user override (say, only a
//! custom `defaultLang`) combines with the full built-in defaults
//! without discarding the untouched translation catalog.

use serde_json::{Map, Value};

/// Merge JSON sources into a single object, later sources winning.
///
/// Sources that are not objects (null, scalars, arrays) are skipped as
/// if they were empty objects. There are no error conditions.
pub fn merge(sources: &[Value]) -> Value {
    let mut target = Map::new();
    for source in sources {
        if let Value::Object(fields) = source {
            merge_into(&mut target, fields);
        }
    }
    Value::Object(target)
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(nested) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                // A scalar under the same key gives way to the nested object.
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(existing) = slot {
                    merge_into(existing, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
