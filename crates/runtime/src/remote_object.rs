//! Remote object descriptions.

use common::{ProtocolError, ProtocolResult};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Type tag of a remote object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteObjectType {
    Object,
    Function,
    Undefined,
    String,
    Number,
    Boolean,
    Symbol,
    Bigint,
}

impl RemoteObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteObjectType::Object => "object",
            RemoteObjectType::Function => "function",
            RemoteObjectType::Undefined => "undefined",
            RemoteObjectType::String => "string",
            RemoteObjectType::Number => "number",
            RemoteObjectType::Boolean => "boolean",
            RemoteObjectType::Symbol => "symbol",
            RemoteObjectType::Bigint => "bigint",
        }
    }
}

/// Mirror object referencing an original JavaScript object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject {
    /// Object type.
    #[serde(rename = "type")]
    pub object_type: RemoteObjectType,
    /// Object subtype hint, only set for `object` values (e.g. "array", "node").
    #[serde(default)]
    pub subtype: Option<String>,
    /// Constructor name for `object` values.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Primitive value, or JSON form of the object when returned by value.
    #[serde(default)]
    pub value: Option<Value>,
    /// Primitive value that has no JSON form, stringified.
    #[serde(default)]
    pub unserializable_value: Option<String>,
    /// String representation of the object.
    #[serde(default)]
    pub description: Option<String>,
    /// Unique identifier of a by-reference object.
    #[serde(default)]
    pub object_id: Option<String>,
}

impl RemoteObject {
    /// Create a description with only the type set.
    pub fn new(object_type: RemoteObjectType) -> Self {
        Self {
            object_type,
            subtype: None,
            class_name: None,
            value: None,
            unserializable_value: None,
            description: None,
            object_id: None,
        }
    }

    /// Create a by-value description.
    pub fn primitive(object_type: RemoteObjectType, value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::new(object_type)
        }
    }

    /// Create a by-reference description.
    pub fn reference(object_type: RemoteObjectType, object_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            ..Self::new(object_type)
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_unserializable(mut self, literal: impl Into<String>) -> Self {
        self.unserializable_value = Some(literal.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the object lives in the remote runtime and is addressed by id.
    pub fn is_reference(&self) -> bool {
        self.object_id.is_some()
    }

    /// Local value of a by-value object.
    pub fn primitive_value(&self) -> ProtocolResult<PrimitiveValue> {
        if let Some(object_id) = &self.object_id {
            return Err(ProtocolError::not_primitive(object_id.clone()));
        }

        if let Some(literal) = &self.unserializable_value {
            if self.object_type == RemoteObjectType::Bigint {
                return Ok(PrimitiveValue::BigInt(literal.trim_end_matches('n').to_string()));
            }
            return match literal.as_str() {
                "-0" => Ok(PrimitiveValue::Number(-0.0)),
                "NaN" => Ok(PrimitiveValue::Number(f64::NAN)),
                "Infinity" => Ok(PrimitiveValue::Number(f64::INFINITY)),
                "-Infinity" => Ok(PrimitiveValue::Number(f64::NEG_INFINITY)),
                other => Err(ProtocolError::unsupported(other)),
            };
        }

        match (&self.value, self.object_type) {
            (Some(value), _) => Ok(PrimitiveValue::Json(value.clone())),
            (None, RemoteObjectType::Undefined) => Ok(PrimitiveValue::Undefined),
            (None, _) => Ok(PrimitiveValue::Json(Value::Null)),
        }
    }
}

/// Local form of a remote primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveValue {
    Undefined,
    /// Numbers that JSON cannot carry (NaN, the infinities, negative zero).
    Number(f64),
    /// Decimal digits of a bigint, without the `n` suffix.
    BigInt(String),
    Json(Value),
}

impl fmt::Display for PrimitiveValue {
    /// Renders the value the way JavaScript string conversion would.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Undefined => f.write_str("undefined"),
            PrimitiveValue::Number(n) => write_js_number(f, *n),
            PrimitiveValue::BigInt(digits) => f.write_str(digits),
            PrimitiveValue::Json(Value::String(s)) => f.write_str(s),
            PrimitiveValue::Json(Value::Number(n)) => match n.as_f64() {
                Some(n) => write_js_number(f, n),
                None => write!(f, "{}", n),
            },
            PrimitiveValue::Json(value) => write!(f, "{}", value),
        }
    }
}

/// Number-to-string conversion: exponent form below 1e-6 and from 1e21 up,
/// with an explicit `+` on positive exponents.
fn write_js_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&exp),
        };
    }
    write!(f, "{}", n)
}
