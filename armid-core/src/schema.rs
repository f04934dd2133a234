//! Schema - Attribute schemas for resource configurations
//!
//! Providers declare a schema per resource type. Identifier-typed
//! attributes are checked through the validation adapters, so a
//! configuration referencing the wrong kind of resource is rejected
//! before any API call is made.

use std::collections::HashMap;
use std::fmt;

use crate::id::ParseId;
use crate::validation::{self, ValidateFn, ValidationError};
use crate::value::Value;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    String,
    Int,
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Identifier of a specific resource kind
    ResourceId {
        label: &'static str,
        validate: ValidateFn,
    },
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
}

impl AttributeType {
    /// Check a value against this type, `name` being the attribute path
    pub fn validate(&self, name: &str, value: &Value) -> Result<(), Vec<TypeError>> {
        match (self, value) {
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(vec![TypeError::InvalidEnumVariant {
                        name: name.to_string(),
                        value: s.clone(),
                        expected: variants.clone(),
                    }])
                }
            }

            (AttributeType::ResourceId { validate, .. }, v) => {
                let (warnings, errors) = validate(v, name);
                for warning in warnings {
                    log::warn!("{}: {}", name, warning);
                }
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors.into_iter().map(TypeError::InvalidId).collect())
                }
            }

            (AttributeType::List(inner), Value::List(items)) => {
                let errors: Vec<TypeError> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| inner.validate(&format!("{}[{}]", name, i), item).err())
                    .flatten()
                    .collect();
                if errors.is_empty() { Ok(()) } else { Err(errors) }
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                let errors: Vec<TypeError> = map
                    .iter()
                    .filter_map(|(k, v)| inner.validate(&format!("{}.{}", name, k), v).err())
                    .flatten()
                    .collect();
                if errors.is_empty() { Ok(()) } else { Err(errors) }
            }

            _ => Err(vec![TypeError::TypeMismatch {
                name: name.to_string(),
                expected: self.type_name(),
                got: value.type_name().to_string(),
            }]),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::ResourceId { label, .. } => format!("{} ID", label),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("'{name}': type mismatch, expected {expected}, got {got}")]
    TypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    #[error("'{name}': invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        name: String,
        value: String,
        expected: Vec<String>,
    },

    #[error(transparent)]
    InvalidId(#[from] ValidationError),

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub description: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource_type: String,
    /// Registry name of the identifier kind keying this resource in state
    pub id_kind: &'static str,
    pub attributes: HashMap<String, AttributeSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>, id_kind: &'static str) -> Self {
        Self {
            resource_type: resource_type.into(),
            id_kind,
            attributes: HashMap::new(),
            description: None,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Validate resource attributes
    pub fn validate(&self, attributes: &HashMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for (name, schema) in &self.attributes {
            let present = attributes.get(name).is_some_and(|v| *v != Value::Null);
            if schema.required && !present {
                errors.push(TypeError::MissingRequired { name: name.clone() });
            }
        }

        for (name, value) in attributes {
            if *value == Value::Null {
                continue;
            }
            // Unknown attributes are allowed
            if let Some(schema) = self.attributes.get(name)
                && let Err(e) = schema.attr_type.validate(name, value)
            {
                errors.extend(e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort_by_key(|e| e.to_string());
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// Attribute holding an identifier of kind `T`
    pub fn resource_id<T: ParseId>() -> AttributeType {
        AttributeType::ResourceId {
            label: T::LABEL,
            validate: validation::validate_id::<T>,
        }
    }

    /// List of identifiers of kind `T`
    pub fn resource_id_list<T: ParseId>() -> AttributeType {
        AttributeType::List(Box::new(resource_id::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ResourceGroupId, SubscriptionId};

    fn group_schema() -> ResourceSchema {
        ResourceSchema::new("test.group_link", "resource_group")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(
                AttributeSchema::new("resource_group_id", types::resource_id::<ResourceGroupId>())
                    .required(),
            )
            .attribute(AttributeSchema::new(
                "subscription_ids",
                types::resource_id_list::<SubscriptionId>(),
            ))
            .attribute(AttributeSchema::new(
                "sku",
                AttributeType::Enum(vec!["Basic".to_string(), "Standard".to_string()]),
            ))
    }

    #[test]
    fn validates_identifier_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::from("link1"));
        attrs.insert(
            "resource_group_id".to_string(),
            Value::from("/subscriptions/sub/resourceGroups/group1"),
        );
        attrs.insert(
            "subscription_ids".to_string(),
            Value::List(vec![Value::from("/subscriptions/a"), Value::from("/subscriptions/b")]),
        );
        attrs.insert("sku".to_string(), Value::from("Standard"));
        assert!(group_schema().validate(&attrs).is_ok());
    }

    #[test]
    fn reports_wrong_identifier_kind() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::from("link1"));
        attrs.insert("resource_group_id".to_string(), Value::from("/subscriptions/sub"));
        let errors = group_schema().validate(&attrs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeError::InvalidId(ValidationError::InvalidId { key, .. }) if key == "resource_group_id"
        ));
    }

    #[test]
    fn reports_list_item_paths() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::from("link1"));
        attrs.insert(
            "resource_group_id".to_string(),
            Value::from("/subscriptions/sub/resourceGroups/group1"),
        );
        attrs.insert(
            "subscription_ids".to_string(),
            Value::List(vec![Value::from("/subscriptions/a"), Value::Int(7)]),
        );
        let errors = group_schema().validate(&attrs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("subscription_ids[1]"));
    }

    #[test]
    fn missing_and_null_required_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::Null);
        let errors = group_schema().validate(&attrs).unwrap_err();
        assert_eq!(
            errors,
            vec![
                TypeError::MissingRequired {
                    name: "name".to_string()
                },
                TypeError::MissingRequired {
                    name: "resource_group_id".to_string()
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_enum_variant() {
        let t = AttributeType::Enum(vec!["Basic".to_string()]);
        assert!(t.validate("sku", &Value::from("Basic")).is_ok());
        assert!(t.validate("sku", &Value::from("Premium")).is_err());
        assert!(t.validate("sku", &Value::Bool(true)).is_err());
    }

    #[test]
    fn type_names() {
        assert_eq!(types::resource_id::<ResourceGroupId>().to_string(), "Resource Group ID");
        assert_eq!(
            types::resource_id_list::<SubscriptionId>().to_string(),
            "List<Subscription ID>"
        );
    }
}
