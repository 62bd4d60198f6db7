//! Dynamic column values.

use serde::{Deserialize, Serialize};

/// A single stored column value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit integer
    BigInt(i64),
    /// Double precision float
    Double(f64),
    /// Text
    Text(String),
}

impl Value {
    /// True for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, if this is an integer value.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Text that counts as a stored translation: non-null and non-empty.
    pub fn as_translation(&self) -> Option<&str> {
        self.as_str().filter(|s| !s.is_empty())
    }

    /// Short type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::BigInt(_) => "integer",
            Value::Double(_) => "float",
            Value::Text(_) => "text",
        }
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::BigInt(v) => serde_json::Value::from(*v),
            Value::Double(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        s.map_or(Value::Null, Value::Text)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::BigInt(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = serde_json::Value;

    /// Scalars convert; arrays and objects are handed back unchanged.
    fn try_from(json: serde_json::Value) -> std::result::Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::BigInt(i)),
                None => n
                    .as_f64()
                    .map(Value::Double)
                    .ok_or(serde_json::Value::Number(n)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_translation_skips_null_and_empty() {
        assert_eq!(Value::Null.as_translation(), None);
        assert_eq!(Value::from("").as_translation(), None);
        assert_eq!(Value::from("x").as_translation(), Some("x"));
        assert_eq!(Value::from(3).as_translation(), None);
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(Value::try_from(json!(7)).unwrap(), Value::BigInt(7));
        assert_eq!(Value::try_from(json!(1.5)).unwrap(), Value::Double(1.5));
        assert_eq!(Value::try_from(json!("a")).unwrap(), Value::from("a"));
        assert!(Value::try_from(json!([1])).is_err());
        assert_eq!(Value::from(7).to_json(), json!(7));
        assert_eq!(Value::Null.to_json(), json!(null));
    }
}
