//! Native attribute values
//!
//! [`Value`] is what record getters return and setters accept. Timestamps are
//! kept as `DateTime<Utc>` here and only become epoch seconds on the form side.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use crate::error::ValueMismatch;
use crate::form::temporal;

/// A single attribute value as seen by the record layer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Short name of the variant, used in mismatch messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert to a transport value
    ///
    /// Timestamps become float seconds since the Unix epoch. Non-finite floats
    /// have no JSON form and become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Float(f) => float_to_json(*f),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Timestamp(ts) => float_to_json(temporal::to_epoch_seconds(ts)),
        }
    }

    /// Convert a scalar transport value
    ///
    /// Returns `None` for arrays and objects, which have no attribute form.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Boolean(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float)),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

fn float_to_json(f: f64) -> serde_json::Value {
    serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
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

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

/// Rust types that can be stored in a record attribute
///
/// Implemented for the scalar types a form can carry and for `Option` of
/// each. `#[derive(Attributes)]` relies on this trait for every field.
pub trait AttributeValue: Sized {
    /// Read the field as a [`Value`]
    fn to_value(&self) -> Value;

    /// Build the field from a [`Value`]
    fn from_value(value: Value) -> Result<Self, ValueMismatch>;
}

fn mismatch(expected: &'static str, found: &Value) -> ValueMismatch {
    ValueMismatch {
        expected,
        found: found.type_name(),
    }
}

impl AttributeValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl AttributeValue for bool {
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        // Form widgets may report whole numbers as floats
        Value::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Some(*f as i64)
        }
        _ => None,
    }
}

macro_rules! integer_attribute_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }

                fn from_value(value: Value) -> Result<Self, ValueMismatch> {
                    integral(&value)
                        .and_then(|i| <$ty>::try_from(i).ok())
                        .ok_or_else(|| mismatch(stringify!($ty), &value))
                }
            }
        )*
    };
}

integer_attribute_value!(i8, i16, i32, i64, u8, u16, u32);

impl AttributeValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(mismatch("float", &other)),
        }
    }
}

impl AttributeValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl AttributeValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(mismatch("timestamp", &other)),
        }
    }
}

impl AttributeValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        DateTime::<Utc>::from_value(value).map(|ts| ts.naive_utc())
    }
}

/// Dates are stored as midnight UTC; any time of day is dropped on assignment
impl AttributeValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_time(NaiveTime::MIN).and_utc())
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Timestamp(ts) => Ok(ts.date_naive()),
            other => Err(mismatch("date", &other)),
        }
    }
}

impl AttributeValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        Ok(value)
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, AttributeValue::to_value)
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
