//! API Response types
//!
//! Success bodies of the HTTP API:
//!
//! ```json
//! { "added":   { ... } }
//! { "updated": { ... } }
//! { "deleted": { ... } }
//! { "items":   { "<id>": { ... }, ... } }
//! { "query":   { ... }, "selection": [ ... ] }
//! ```
//!
//! Single lookups return the bare record.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Envelope naming the mutation that produced `T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutation<T> {
    Added(T),
    Updated(T),
    Deleted(T),
}

/// Keyed listing: serialized as `{"items": {key: record}}`, keys emitted in
/// store order
#[derive(Debug, Clone)]
pub struct Keyed<K, T> {
    pub items: Vec<(K, T)>,
}

impl<K, T> Keyed<K, T> {
    pub fn new(items: Vec<(K, T)>) -> Self {
        Self { items }
    }
}

impl<K: Serialize, T: Serialize> Serialize for Keyed<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Items<'a, K, T>(&'a [(K, T)]);

        impl<K: Serialize, T: Serialize> Serialize for Items<'_, K, T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
            }
        }

        let mut state = serializer.serialize_struct("Keyed", 1)?;
        state.serialize_field("items", &Items(&self.items))?;
        state.end()
    }
}

/// Result of a filter query: the filter echoed back plus the matching records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection<F, T> {
    pub query: F,
    pub selection: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_envelope_shape() {
        let json = serde_json::to_value(Mutation::Added(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "added": 42 }));

        let json = serde_json::to_value(Mutation::Deleted("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "deleted": "x" }));
    }

    #[test]
    fn test_keyed_preserves_order() {
        let keyed = Keyed::new(vec![(5_u64, "five"), (1, "one"), (3, "three")]);
        let json = serde_json::to_string(&keyed).unwrap();
        assert_eq!(json, r#"{"items":{"5":"five","1":"one","3":"three"}}"#);
    }

    #[test]
    fn test_selection_shape() {
        let selection = Selection {
            query: serde_json::json!({ "country": "Spain" }),
            selection: vec![1, 2],
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["query"]["country"], "Spain");
        assert_eq!(json["selection"], serde_json::json!([1, 2]));
    }
}
