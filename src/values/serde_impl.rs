//! Serde support for [`ValueSet`], behind the `serde` feature
//!
//! Serialization is transparent: a `ValueSet<V>` round-trips as the plain
//! map it wraps, so a JSON object deserializes directly into a value set.
//!
//! ```rust
//! use linesman::ValueSet;
//! use serde_json::Value;
//!
//! let values: ValueSet<Value> =
//!     serde_json::from_str(r#"{"name": "Tom Brady", "number": 12}"#).unwrap();
//! assert!(values.contains_field("number"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ValueSet;

impl<V: Serialize> Serialize for ValueSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ValueSet<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HashMap::deserialize(deserializer).map(|values| ValueSet { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_deserialize_json_object() {
        let values: ValueSet<Value> =
            serde_json::from_value(json!({"name": "Tom Brady", "number": 12})).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("number"), Some(&json!(12)));
    }

    #[test]
    fn test_round_trip() {
        let values: ValueSet<i64> = ValueSet::new().with("number", 12).with("yards", 250);
        let encoded = serde_json::to_value(&values).unwrap();
        let decoded: ValueSet<i64> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, values);
    }
}
