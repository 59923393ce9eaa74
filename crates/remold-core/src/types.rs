//! Core data types for the Remold transformation engine
//!
//! This module defines the payload model handed to the engine: ordered
//! fields carrying scalar or composite values, the per-field directives that
//! govern where and how each field lands in the result tree, and the
//! resolver's per-field output.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A scalar payload value
///
/// The leaf currency of both the input payload and the result tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Whether this scalar is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Borrow the string content, if this scalar is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<f64> for Scalar {
    /// Non-finite floats have no JSON representation and map to `Null`
    fn from(n: f64) -> Self {
        Number::from_f64(n).map(Scalar::Number).unwrap_or(Scalar::Null)
    }
}

/// Case transform direction for string values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseMode {
    Upper,
    Lower,
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseMode::Upper => write!(f, "upper"),
            CaseMode::Lower => write!(f, "lower"),
        }
    }
}

/// A per-field rule altering the field's output path and/or value
///
/// A field may carry several directives at once; resolution follows the
/// fixed precedence in [`crate::transform::resolver`], not declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Replace the declared field name with the given name
    Rename(String),
    /// Strip the given prefix from the declared field name, if present
    CleanPrefix(String),
    /// Case-transform the resolved value, strings only, never the path
    CaseTransform(CaseMode),
    /// Place the field at this dotted path, overriding name and parent path
    NestedPath(String),
    /// Substitute this value when the field's value is null
    DefaultValue(Scalar),
}

/// A field's value: either a scalar leaf or a nested payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Scalar(Scalar),
    Composite(Payload),
}

/// One named field of a payload, with its directives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Declared field name
    pub name: String,
    /// The field's value
    pub value: FieldValue,
    /// Directives governing path and value resolution
    pub directives: Vec<Directive>,
}

impl Field {
    /// Create a scalar field with no directives
    pub fn scalar(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Field {
            name: name.into(),
            value: FieldValue::Scalar(value.into()),
            directives: Vec::new(),
        }
    }

    /// Create a composite field holding a nested payload
    pub fn composite(name: impl Into<String>, payload: Payload) -> Self {
        Field {
            name: name.into(),
            value: FieldValue::Composite(payload),
            directives: Vec::new(),
        }
    }

    /// Append a directive, builder-style
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// An ordered, tree-shaped input value
///
/// Payloads are immutable inputs: the engine never mutates them, which is
/// what lets the benchmark harness share one payload across concurrent
/// tasks without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    fields: Vec<Field>,
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Payload { fields: Vec::new() }
    }

    /// Append a field, builder-style
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The payload's fields, in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The resolver's output for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedField {
    /// Absolute dotted output path in the result tree
    pub path: String,
    /// Resolved scalar value (defaults and case transform applied)
    pub value: Scalar,
}
