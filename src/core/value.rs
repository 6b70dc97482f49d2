//! Purpose: In-memory value tree mixing native JSON data with opaque extended values.
//! Exports: `Value`, `Object`, `Extended`, `DynExtended`, `type_name_of`.
//! Role: Input of the encoder and output of the decoder.
//! Invariants: Objects keep insertion order; the encoder appends the tag key last.
//! Invariants: A type's runtime name is derived from `std::any::type_name` only.
use std::any::Any;
use std::fmt;

use indexmap::IndexMap;
use serde_json::Number;

/// String-keyed mapping that preserves insertion order.
pub type Object = IndexMap<String, Value>;

/// Marker for application types that travel through JSON as tagged mappings.
///
/// Opting in is an empty impl; the type must be `Clone + PartialEq + Debug`:
///
/// ```
/// use extjson::Extended;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Complex {
///     re: f64,
///     im: f64,
/// }
///
/// impl Extended for Complex {}
/// ```
pub trait Extended: DynExtended + fmt::Debug + Send + Sync + 'static {}

/// Type-erased operations every `Extended` type gets for free.
pub trait DynExtended {
    /// Runtime type name used as the wire tag and hook key.
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn eq_extended(&self, other: &dyn Extended) -> bool;
    fn clone_extended(&self) -> Box<dyn Extended>;
}

impl<T> DynExtended for T
where
    T: Extended + Clone + PartialEq,
{
    fn type_name(&self) -> &'static str {
        type_name_of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_extended(&self, other: &dyn Extended) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn clone_extended(&self) -> Box<dyn Extended> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Extended> {
    fn clone(&self) -> Self {
        (**self).clone_extended()
    }
}

impl PartialEq for dyn Extended {
    fn eq(&self, other: &Self) -> bool {
        self.eq_extended(other)
    }
}

/// Last path segment of the type's name, generic arguments dropped.
///
/// `my_app::geo::Point<f32>` becomes `Point`. No other normalization happens,
/// so the result is case-sensitive.
pub fn type_name_of<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Extended(Box<dyn Extended>),
}

impl Value {
    pub fn extended<T: Extended>(value: T) -> Self {
        Value::Extended(Box::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(num) => num.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(num) => num.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(num) => num.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_extended(&self) -> Option<&dyn Extended> {
        match self {
            Value::Extended(ext) => Some(ext.as_ref()),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Extended>(&self) -> Option<&T> {
        self.as_extended()
            .and_then(|ext| ext.as_any().downcast_ref::<T>())
    }

    /// Looks up `key` when `self` is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(val) => Value::Bool(val),
            serde_json::Value::Number(num) => Value::Number(num),
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
