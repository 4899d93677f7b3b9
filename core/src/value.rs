//! Value types validated by constraints.
//!
//! Values are the already-available data a constraint is checked against.
//! Assay supports scalar types (String, Int, Float, Bool, Timestamp) and
//! structured types (List, Record). `Null` stands for an absent value.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Ordered mapping used for composite values.
pub type Record = BTreeMap<String, Value>;

/// A value that can be checked against a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Timestamp as milliseconds since Unix epoch.
    Timestamp(i64),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Keyed composite value (an object with properties).
    Record(Record),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a list or a record.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::List(_) | Value::Record(_))
    }

    /// Numeric view of the value.
    ///
    /// Ints, floats and numeric strings (`"12"`, `" 3.5 "`) convert; everything else is `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// String view of a scalar value.
    ///
    /// Strings are borrowed as-is; ints, floats, bools and timestamps are formatted.
    /// Null, lists and records have no string form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Timestamp(t) => Some(t.to_string()),
            Value::Null | Value::List(_) | Value::Record(_) => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Timestamp(_) => "Timestamp",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
        }
    }

    /// Compare two values of comparable types.
    ///
    /// Numbers compare across Int/Float, strings lexicographically, timestamps
    /// chronologically. Any other pairing is incomparable and returns `None`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.to_number()?.partial_cmp(&other.to_number()?)
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Render the value the way violation parameters quote it.
    ///
    /// Strings are wrapped in double quotes, structured values are summarised.
    pub fn to_param(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::String(s) => format!("\"{}\"", s),
            Value::List(_) => "array".to_string(),
            Value::Record(_) => "object".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Timestamp(t) => write!(f, "ts:{}", t),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Record> for Value {
    fn from(fields: Record) -> Self {
        Value::Record(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Helper macro to create record values.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record(std::collections::BTreeMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::BTreeMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            $crate::Value::Record(map)
        }
    };
}
