//! Schema - attribute schemas for resources, data sources and the provider block
//!
//! Each resource type declares its attributes with their type, whether they
//! are required, optional or computed, a default and any conflicting
//! attributes. The provider applies defaults and validates desired
//! configuration against the schema before calling NetBox.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Attribute type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// JSON string
    String,
    /// JSON integer
    Int,
    /// JSON boolean
    Bool,
}

impl AttributeType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Int => value.is_i64() || value.is_u64(),
            AttributeType::Bool => value.is_boolean(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeType::String => "String",
            AttributeType::Int => "Int",
            AttributeType::Bool => "Bool",
        };
        write!(f, "{}", name)
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Int",
        Value::String(_) => "String",
        Value::Array(_) => "List",
        Value::Object(_) => "Map",
    }
}

/// Schema violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A required attribute is absent or null
    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    /// The attribute is not declared in the schema
    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    /// The value has the wrong JSON type
    #[error("Type mismatch for '{name}': expected {expected}, got {got}")]
    TypeMismatch {
        name: String,
        expected: AttributeType,
        got: &'static str,
    },

    /// Two mutually exclusive attributes are both set
    #[error("'{name}' conflicts with '{other}'")]
    Conflict { name: String, other: String },
}

/// Attribute schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Must be supplied by configuration
    pub required: bool,
    /// May be supplied by configuration
    pub optional: bool,
    /// Filled in from NetBox
    pub computed: bool,
    /// Value used when configuration leaves the attribute unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Attributes that may not be set together with this one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts_with: Vec<String>,
    /// Help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    /// Attribute of the given type, neither required nor optional
    pub fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            required: false,
            optional: false,
            computed: false,
            default: None,
            conflicts_with: Vec::new(),
            description: None,
        }
    }

    /// String attribute
    pub fn string() -> Self {
        Self::new(AttributeType::String)
    }

    /// Integer attribute
    pub fn int() -> Self {
        Self::new(AttributeType::Int)
    }

    /// Boolean attribute
    pub fn bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as computed
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Default for an absent optional attribute (implies optional)
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.optional = true;
        self.default = Some(value.into());
        self
    }

    /// Declare attributes that may not be set alongside this one
    pub fn conflicts_with(mut self, names: &[&str]) -> Self {
        self.conflicts_with = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    /// Attach help text
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Attribute schema for one resource type, data source or the provider block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Schema with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute
    pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Attribute by name
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes.iter().map(|(name, attr)| (name.as_str(), attr))
    }

    /// Fill defaults for absent (or null) attributes
    pub fn apply_defaults(&self, values: &mut Map<String, Value>) {
        for (name, attr) in &self.attributes {
            if let Some(default) = &attr.default
                && values.get(name).is_none_or(Value::is_null)
            {
                values.insert(name.clone(), default.clone());
            }
        }
    }

    /// Validate attribute values, collecting every violation
    pub fn validate(&self, values: &Map<String, Value>) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();
        let mut conflicts = BTreeSet::new();
        let is_set = |name: &str| values.get(name).is_some_and(|v| !v.is_null());

        for (name, attr) in &self.attributes {
            if attr.required && !is_set(name) {
                errors.push(SchemaError::MissingRequired { name: name.clone() });
            }
        }

        for (name, value) in values {
            let Some(attr) = self.attributes.get(name) else {
                errors.push(SchemaError::UnknownAttribute { name: name.clone() });
                continue;
            };
            if value.is_null() {
                continue;
            }
            if !attr.attr_type.accepts(value) {
                errors.push(SchemaError::TypeMismatch {
                    name: name.clone(),
                    expected: attr.attr_type,
                    got: value_type_name(value),
                });
            }
            for other in &attr.conflicts_with {
                if is_set(other) {
                    let pair = if name < other { (name, other) } else { (other, name) };
                    conflicts.insert(pair);
                }
            }
        }

        errors.extend(conflicts.into_iter().map(|(name, other)| SchemaError::Conflict {
            name: name.clone(),
            other: other.clone(),
        }));

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .attribute("name", Attribute::string().required())
            .attribute("enabled", Attribute::bool().with_default(false))
            .attribute("count", Attribute::int().optional())
            .attribute("prefixes_id", Attribute::int().optional().conflicts_with(&["vlan_vid"]))
            .attribute("vlan_vid", Attribute::int().optional().conflicts_with(&["prefixes_id"]))
    }

    fn values(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_valid_values() {
        let attrs = values(json!({"name": "prod", "enabled": true, "count": 3}));
        assert!(schema().validate(&attrs).is_ok());
    }

    #[test]
    fn test_missing_required() {
        let errors = schema().validate(&values(json!({"count": 1}))).unwrap_err();
        assert_eq!(errors, vec![SchemaError::MissingRequired { name: "name".to_string() }]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let errors = schema().validate(&values(json!({"name": null}))).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unknown_and_mismatched() {
        let errors = schema()
            .validate(&values(json!({"name": 5, "colour": "red"})))
            .unwrap_err();
        assert!(errors.contains(&SchemaError::UnknownAttribute { name: "colour".to_string() }));
        assert!(errors.contains(&SchemaError::TypeMismatch {
            name: "name".to_string(),
            expected: AttributeType::String,
            got: "Int",
        }));
    }

    #[test]
    fn test_conflict_reported_once() {
        let errors = schema()
            .validate(&values(json!({"name": "x", "prefixes_id": 1, "vlan_vid": 100})))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![SchemaError::Conflict {
                name: "prefixes_id".to_string(),
                other: "vlan_vid".to_string(),
            }]
        );
    }

    #[test]
    fn test_conflict_declared_on_later_attribute_only() {
        let schema = Schema::new()
            .attribute("a", Attribute::int().optional())
            .attribute("b", Attribute::int().optional().conflicts_with(&["a"]));

        let errors = schema.validate(&values(json!({"a": 1, "b": 2}))).unwrap_err();
        assert_eq!(
            errors,
            vec![SchemaError::Conflict {
                name: "a".to_string(),
                other: "b".to_string(),
            }]
        );
        assert!(schema.validate(&values(json!({"b": 2}))).is_ok());
    }

    #[test]
    fn test_apply_defaults_keeps_explicit_values() {
        let mut attrs = values(json!({"name": "x"}));
        schema().apply_defaults(&mut attrs);
        assert_eq!(attrs.get("enabled"), Some(&json!(false)));

        let mut attrs = values(json!({"name": "x", "enabled": true}));
        schema().apply_defaults(&mut attrs);
        assert_eq!(attrs.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn test_serializes_for_schema_dump() {
        let dumped = serde_json::to_value(Schema::new().attribute("status", Attribute::string().with_default("active"))).unwrap();
        assert_eq!(
            dumped,
            json!({"status": {"type": "string", "required": false, "optional": true, "computed": false, "default": "active"}})
        );
    }
}
