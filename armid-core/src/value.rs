//! Value - Untyped configuration values handed over by the schema layer

use std::collections::HashMap;

/// Attribute value of a resource configuration
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::String(_) => "String",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a JSON value as stored in state
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_json_values() {
        let json = serde_json::json!({
            "name": "gw1",
            "zones": ["1", "2"],
            "idle_timeout": 4,
            "ratio": 0.5,
            "enabled": true,
            "tags": null,
        });
        let Value::Map(map) = Value::from_json(&json) else {
            panic!("expected a map");
        };
        assert_eq!(map["name"], Value::String("gw1".to_string()));
        assert_eq!(map["zones"], Value::List(vec!["1".into(), "2".into()]));
        assert_eq!(map["idle_timeout"], Value::Int(4));
        assert_eq!(map["ratio"], Value::Float(0.5));
        assert_eq!(map["enabled"], Value::Bool(true));
        assert_eq!(map["tags"], Value::Null);
    }

    #[test]
    fn as_str_only_for_strings() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Int(1).as_str(), None);
    }
}
