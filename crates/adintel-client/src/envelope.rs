//! List response normalization
//!
//! List endpoints answer with `{"items": [...]}`, `{"results": [...]}` or a
//! bare array depending on the backend router. Views only care about the
//! rows, so every shape collapses into the same [`ListEnvelope`].

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A normalized list response
#[derive(Debug, Clone, PartialEq)]
pub struct ListEnvelope<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> ListEnvelope<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

/// Pull the row array and `total` out of whichever shape arrived
fn split_list(value: Value) -> Result<(Value, Option<u64>), String> {
    match value {
        rows @ Value::Array(_) => Ok((rows, None)),
        Value::Object(mut map) => {
            let total = map.get("total").and_then(Value::as_u64);
            let rows = map
                .remove("items")
                .or_else(|| map.remove("results"))
                .ok_or_else(|| "expected an `items` or `results` array".to_string())?;
            Ok((rows, total))
        }
        other => Err(format!("expected a list response, found {}", other)),
    }
}

impl<'de, T> Deserialize<'de> for ListEnvelope<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let (rows, total) = split_list(value).map_err(D::Error::custom)?;
        let items = Vec::<T>::deserialize(rows).map_err(D::Error::custom)?;
        Ok(ListEnvelope { items, total })
    }
}
