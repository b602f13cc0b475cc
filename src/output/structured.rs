//! YAML and JSON deserialization for tools with structured output.

use serde::de::DeserializeOwned;

use crate::error::AdapterError;

/// Deserialize a YAML document, treating blank output as `T::default()`.
pub fn from_yaml<T>(adapter: &str, text: &str) -> Result<T, AdapterError>
where
    T: DeserializeOwned + Default,
{
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(text).map_err(|e| AdapterError::parse(adapter, e))
}

/// Deserialize a JSON document, treating blank output as `T::default()`.
pub fn from_json<T>(adapter: &str, text: &str) -> Result<T, AdapterError>
where
    T: DeserializeOwned + Default,
{
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(text).map_err(|e| AdapterError::parse(adapter, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_blank_is_default() {
        let items: Vec<Item> = from_yaml("Tool", "").unwrap();
        assert!(items.is_empty());
        let items: Vec<Item> = from_json("Tool", "\n  \n").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_yaml_sequence() {
        let items: Vec<Item> = from_yaml("Tool", "- name: a\n- name: b\n").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "b");
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let err = from_json::<Vec<Item>>("ESLint", "[{").unwrap_err();
        assert!(matches!(err, AdapterError::Parse { ref adapter, .. } if adapter == "ESLint"));

        let err = from_yaml::<Vec<Item>>("APILinter", "- name: [unclosed").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
