//! Lenient decoding shared by the response models: unknown enum values read
//! as `None`, null list elements are dropped and a null list reads as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

pub fn non_null_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

pub fn non_null_nested_vec<'de, D, T>(deserializer: D) -> Result<Vec<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let rows = Option::<Vec<Option<Vec<Option<T>>>>>::deserialize(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|row| row.into_iter().flatten().collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TransportType;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient")]
        mode: Option<TransportType>,
        #[serde(default, deserialize_with = "non_null_vec")]
        lines: Vec<String>,
    }

    #[test]
    fn unknown_enum_reads_as_none() {
        let probe: Probe = serde_json::from_value(json!({"mode": "Teleport"})).unwrap();
        assert!(probe.mode.is_none());
        let probe: Probe = serde_json::from_value(json!({"mode": "Walking"})).unwrap();
        assert_eq!(probe.mode, Some(TransportType::Walking));
    }

    #[test]
    fn null_elements_and_lists() {
        let probe: Probe = serde_json::from_value(json!({"lines": ["a", null, "b"]})).unwrap();
        assert_eq!(probe.lines, vec!["a", "b"]);
        let probe: Probe = serde_json::from_value(json!({"lines": null})).unwrap();
        assert!(probe.lines.is_empty());
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.lines.is_empty());
    }
}
