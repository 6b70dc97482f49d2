//! Purpose: Encode value trees, dispatching extended values to per-type hooks.
//! Exports: `Encoder`, `TYPE_KEY`.
//! Role: Extensible counterpart of the plain serde_json encoder.
//! Invariants: Hook output gets the tag key appended last, holding the runtime type name.
//! Invariants: Hook errors are returned unchanged; no wrapping or retry.
//! Invariants: An encoder with no hooks behaves exactly like the plain encoder.
use std::collections::HashMap;
use std::fmt;

use serde_json::Map;
use tracing::{debug, trace};

use crate::core::error::{Error, ErrorKind};
use crate::core::value::{Extended, Object, Value, type_name_of};

/// Default reserved key carrying the runtime type name of a tagged mapping.
pub const TYPE_KEY: &str = "__extended_json_type__";

type EncodeHook = Box<dyn Fn(&dyn Extended) -> Result<Object, Error> + Send + Sync>;

/// Hook registry plus the tag key, built once and shared (usually via `Arc`).
///
/// ```
/// use extjson::{Encoder, Extended, Object, Value};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl Extended for Celsius {}
///
/// let encoder = Encoder::new().with_hook(|c: &Celsius| {
///     Ok(Object::from([("degrees".to_string(), Value::from(c.0))]))
/// });
/// let json = encoder.encode(&Value::extended(Celsius(21.5))).unwrap();
/// assert_eq!(json["__extended_json_type__"], "Celsius");
/// ```
pub struct Encoder {
    type_key: String,
    hooks: HashMap<String, EncodeHook>,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            type_key: TYPE_KEY.to_string(),
            hooks: HashMap::new(),
        }
    }

    /// Registers the encode hook for `T`, replacing any earlier hook for the same name.
    pub fn with_hook<T, F>(mut self, hook: F) -> Self
    where
        T: Extended,
        F: Fn(&T) -> Result<Object, Error> + Send + Sync + 'static,
    {
        let name = type_name_of::<T>();
        let erased: EncodeHook = Box::new(move |value: &dyn Extended| {
            // Two types sharing a short name land here with the wrong concrete type.
            match value.as_any().downcast_ref::<T>() {
                Some(value) => hook(value),
                None => Err(unserializable(value.type_name())),
            }
        });
        self.hooks.insert(name.to_string(), erased);
        self
    }

    pub fn with_type_key(mut self, type_key: impl Into<String>) -> Self {
        self.type_key = type_key.into();
        self
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn has_hook(&self, type_name: &str) -> bool {
        self.hooks.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn hook_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Produces the tagged mapping for a value with no native JSON form.
    pub fn default_hook(&self, value: &dyn Extended) -> Result<Object, Error> {
        let name = value.type_name();
        let Some(hook) = self.hooks.get(name) else {
            debug!(type_name = name, "no encode hook registered");
            return Err(unserializable(name));
        };

        let mut encoded = hook(value)?;
        if encoded.contains_key(&self.type_key) {
            return Err(Error::new(ErrorKind::ReservedKey)
                .with_message(format!(
                    "encode hook output already contains reserved key {:?}",
                    self.type_key
                ))
                .with_type_name(name));
        }
        encoded.insert(self.type_key.clone(), Value::String(name.to_string()));
        trace!(type_name = name, fields = encoded.len(), "encoded extended value");
        Ok(encoded)
    }

    /// Converts `value` into a plain JSON tree, tagging every extended value.
    pub fn encode(&self, value: &Value) -> Result<serde_json::Value, Error> {
        match value {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(val) => Ok(serde_json::Value::Bool(*val)),
            Value::Number(num) => Ok(serde_json::Value::Number(num.clone())),
            Value::String(text) => Ok(serde_json::Value::String(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| self.encode(item))
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::Object(map) => self.encode_object(map),
            Value::Extended(ext) => {
                let tagged = self.default_hook(ext.as_ref())?;
                // Hook output may itself hold extended values.
                self.encode_object(&tagged)
            }
        }
    }

    fn encode_object(&self, map: &Object) -> Result<serde_json::Value, Error> {
        let mut out = Map::with_capacity(map.len());
        for (key, value) in map {
            out.insert(key.clone(), self.encode(value)?);
        }
        Ok(serde_json::Value::Object(out))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("type_key", &self.type_key)
            .field("hooks", &self.hook_names())
            .finish()
    }
}

fn unserializable(type_name: &str) -> Error {
    Error::new(ErrorKind::Unserializable)
        .with_message(format!("Object of type {type_name} is not JSON serializable"))
        .with_type_name(type_name)
}
