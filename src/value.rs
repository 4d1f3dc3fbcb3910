use std::collections::HashMap;

use rust_decimal::Decimal;

/// A value bound to a query parameter.
///
/// This type covers everything a document-database query can bind:
/// JSON scalars, exact decimals, raw bytes, arrays, and whole document
/// fragments.
///
/// # Sequence semantics
///
/// Only [`Value::Array`] counts as a sequence when the query builder
/// expands a placeholder into an `IN (...)` list. Strings and byte
/// buffers are scalars even though they are iterable in most host
/// languages, and objects are bound whole as document fragments.
///
/// # Examples
///
/// ```
/// use querydef::Value;
///
/// let name: Value = "Alice".into();
/// let age: Value = 30.into();
/// let tags: Value = vec!["a", "b"].into();
/// let missing: Value = Option::<i64>::None.into();
///
/// assert!(tags.is_sequence());
/// assert!(!name.is_sequence());
/// assert_eq!(missing, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Exact decimal number (money, quantities)
    Decimal(Decimal),

    /// UTF-8 string; never expanded as a sequence
    String(String),

    /// Raw byte buffer; never expanded as a sequence
    Bytes(Vec<u8>),

    /// Ordered sequence of values; expands in `IN` clauses
    Array(Vec<Value>),

    /// Document fragment with string keys; bound whole
    Object(HashMap<String, Value>),
}

impl Value {
    /// Build a byte-buffer value.
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// True if the value expands into multiple parameters at a
    /// placeholder site.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the array elements, if this is a sequence
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
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

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
