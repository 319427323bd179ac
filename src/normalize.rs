//! Response Normalization
//!
//! Accepts both plain-array and paginated-envelope (`{"results": [...]}`)
//! collection payloads.

use serde_json::Value;

use crate::fields::is_truthy;

/// Resolve a decoded payload into its record sequence.
///
/// A truthy `results` member takes precedence over the payload itself;
/// whatever is resolved must be an array, otherwise the collection is empty.
pub fn normalize_collection(payload: Value) -> Vec<Value> {
    let resolved = match payload {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) if is_truthy(&results) => results,
            _ => Value::Object(map),
        },
        other => other,
    };

    match resolved {
        Value::Array(records) => records,
        _ => Vec::new(),
    }
}
