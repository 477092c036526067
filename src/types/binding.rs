use crate::error::BrokerError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const DATABASE: &str = "database";

/// Free-form parameters attached to a bind request.
///
/// Only [`USERNAME`], [`PASSWORD`] and [`DATABASE`] are interpreted; anything
/// else is carried along untouched. A key mapped to JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingParameters(Map<String, Value>);

impl BindingParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// String value of `key`, `None` when missing or null.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, BrokerError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(BrokerError::InvalidParameter {
                key: key.to_string(),
                found: json_type_name(other),
            }),
        }
    }

    pub fn username(&self) -> Result<Option<&str>, BrokerError> {
        self.get_str(USERNAME)
    }

    pub fn password(&self) -> Result<Option<&str>, BrokerError> {
        self.get_str(PASSWORD)
    }

    pub fn database(&self) -> Result<Option<&str>, BrokerError> {
        self.get_str(DATABASE)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
