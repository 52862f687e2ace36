//! Resource state
//!
//! `ResourceData` is the per-instance state handed over by the host runtime:
//! an opaque identifier plus a flat map of attribute values. An empty
//! identifier means the object does not exist (yet).

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier and attributes of one resource or data source instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl ResourceData {
    /// Empty state with no identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// State built from configuration values, identifier unset
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        Self {
            id: String::new(),
            attributes,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Persisted identifier, empty until created
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the persisted identifier
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// All attribute values
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Mutable access to attribute values
    pub fn attributes_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.attributes
    }

    /// Attribute value, treating null as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// Store an attribute value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    /// String attribute, if set
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Non-empty string value
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get_str(key).filter(|s| !s.is_empty())
    }

    /// Free-text value; absent becomes the empty string
    pub fn get_string(&self, key: &str) -> String {
        self.get_str(key).unwrap_or_default().to_string()
    }

    /// Integer attribute, if set
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Boolean attribute, if set
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Reference to a related object; zero and negative values count as unset
    pub fn get_reference(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64).filter(|id| *id != 0)
    }

    /// Store a reference read back from NetBox; an unset reference is stored as 0
    pub fn set_reference(&mut self, key: &str, id: Option<u64>) {
        self.set(key, id.unwrap_or(0));
    }

    /// String attribute that must be present
    pub fn require_str(&self, key: &str) -> Result<&str, ProviderError> {
        self.get_str(key).ok_or_else(|| missing(key))
    }

    /// Non-zero ID attribute that must be present
    pub fn require_reference(&self, key: &str) -> Result<u64, ProviderError> {
        self.get_reference(key).ok_or_else(|| missing(key))
    }
}

fn missing(key: &str) -> ProviderError {
    ProviderError::MissingAttribute {
        name: key.to_string(),
    }
}

/// Numeric ID at the end of an identifier (`ipam/vrf/42` or `42`)
pub fn parse_identifier(identifier: &str) -> Result<u64, ProviderError> {
    identifier
        .rsplit('/')
        .next()
        .and_then(|last| last.parse::<u64>().ok())
        .filter(|id| *id != 0)
        .ok_or_else(|| ProviderError::InvalidIdentifier {
            identifier: identifier.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("ipam/vrf/42").unwrap(), 42);
        assert_eq!(parse_identifier("org/tenant-group/2").unwrap(), 2);
        assert_eq!(parse_identifier("5").unwrap(), 5);
        assert!(parse_identifier("").is_err());
        assert!(parse_identifier("ipam/vrf/").is_err());
        assert!(parse_identifier("ipam/vrf/abc").is_err());
        assert!(parse_identifier("ipam/vrf/0").is_err());
    }

    #[test]
    fn test_references_ignore_zero_and_null() {
        let data = ResourceData::new()
            .with("tenant_id", 0)
            .with("vrf_id", 7)
            .with("vlan_id", Value::Null)
            .with("nat_inside_ip_address_id", -3);
        assert_eq!(data.get_reference("tenant_id"), None);
        assert_eq!(data.get_reference("vrf_id"), Some(7));
        assert_eq!(data.get_reference("vlan_id"), None);
        assert_eq!(data.get_reference("nat_inside_ip_address_id"), None);
    }

    #[test]
    fn test_free_text_defaults_to_empty() {
        let data = ResourceData::new().with("name", "prod");
        assert_eq!(data.get_string("description"), "");
        assert_eq!(data.require_str("name").unwrap(), "prod");
        assert!(matches!(
            data.require_str("slug"),
            Err(ProviderError::MissingAttribute { name }) if name == "slug"
        ));
    }

    #[test]
    fn test_set_reference_stores_zero_for_unset() {
        let mut data = ResourceData::new();
        data.set_reference("tenant_id", None);
        assert_eq!(data.get("tenant_id"), Some(&json!(0)));
    }
}
