//! Purpose: Decode JSON trees, rebuilding extended values from tagged mappings.
//! Exports: `Decoder`.
//! Role: Extensible counterpart of the plain serde_json decoder.
//! Invariants: Every mapping is offered to `object_hook`, innermost first.
//! Invariants: Untagged mappings and unknown tags pass through verbatim, tag included.
//! Invariants: Hook errors are returned unchanged.
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::core::error::Error;
use crate::core::value::{Extended, Object, Value, type_name_of};
use crate::encoder::TYPE_KEY;

type DecodeHook = Box<dyn Fn(Object) -> Result<Value, Error> + Send + Sync>;

pub struct Decoder {
    type_key: String,
    hooks: HashMap<String, DecodeHook>,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            type_key: TYPE_KEY.to_string(),
            hooks: HashMap::new(),
        }
    }

    /// Registers an untyped hook for mappings tagged `type_name`.
    ///
    /// The hook receives the whole mapping, tag included, with every nested
    /// value already decoded.
    pub fn with_hook<F>(mut self, type_name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(Object) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.hooks.insert(type_name.into(), Box::new(hook));
        self
    }

    /// Registers a hook rebuilding `T` from mappings tagged with `T`'s runtime name.
    pub fn with_type<T, F>(self, hook: F) -> Self
    where
        T: Extended,
        F: Fn(&Object) -> Result<T, Error> + Send + Sync + 'static,
    {
        self.with_hook(type_name_of::<T>(), move |map| {
            hook(&map).map(Value::extended)
        })
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

    pub fn hook_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Replaces a tagged mapping with the value its hook builds.
    pub fn object_hook(&self, map: Object) -> Result<Value, Error> {
        let name = match map.get(&self.type_key) {
            Some(Value::String(name)) => name.clone(),
            _ => return Ok(Value::Object(map)),
        };
        let Some(hook) = self.hooks.get(&name) else {
            debug!(type_name = %name, "no decode hook registered, passing mapping through");
            return Ok(Value::Object(map));
        };
        trace!(type_name = %name, "decoding tagged mapping");
        hook(map)
    }

    /// Converts a parsed JSON tree, running `object_hook` on every mapping.
    pub fn decode(&self, json: serde_json::Value) -> Result<Value, Error> {
        match json {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| self.decode(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            serde_json::Value::Object(map) => {
                let mut decoded = Object::with_capacity(map.len());
                for (key, value) in map {
                    decoded.insert(key, self.decode(value)?);
                }
                self.object_hook(decoded)
            }
            scalar => Ok(Value::from(scalar)),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("type_key", &self.type_key)
            .field("hooks", &self.hook_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Decoder;
    use crate::core::error::{Error, ErrorKind};
    use crate::core::value::{Extended, Object, Value};
    use crate::encoder::TYPE_KEY;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq)]
    struct Span {
        start: i64,
        end: i64,
    }

    impl Extended for Span {}

    fn field(map: &Object, key: &str) -> Result<i64, Error> {
        map.get(key)
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::hook(format!("missing integer field `{key}`")))
    }

    fn span_decoder() -> Decoder {
        Decoder::new().with_type(|map: &Object| {
            Ok(Span {
                start: field(map, "start")?,
                end: field(map, "end")?,
            })
        })
    }

    #[test]
    fn tagged_mapping_is_rebuilt() {
        let decoded = span_decoder()
            .decode(json!({"start": 3, "end": 5, TYPE_KEY: "Span"}))
            .unwrap();
        assert_eq!(decoded, Value::extended(Span { start: 3, end: 5 }));
    }

    #[test]
    fn untagged_mappings_pass_through() {
        let decoder = span_decoder();
        assert_eq!(decoder.decode(json!({})).unwrap(), Value::Object(Object::new()));

        let plain = json!({"start": 3, "end": 5});
        assert_eq!(decoder.decode(plain.clone()).unwrap(), Value::from(plain));
    }

    #[test]
    fn unknown_tag_passes_through_with_tag() {
        let tagged = json!({"re": 1, TYPE_KEY: "Complex"});
        let decoded = span_decoder().decode(tagged.clone()).unwrap();
        assert_eq!(decoded, Value::from(tagged));
        assert_eq!(decoded.get(TYPE_KEY).and_then(Value::as_str), Some("Complex"));
    }

    #[test]
    fn non_string_tag_passes_through() {
        let tagged = json!({TYPE_KEY: 7});
        let decoded = span_decoder().decode(tagged.clone()).unwrap();
        assert_eq!(decoded, Value::from(tagged));
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        let tagged = json!({"start": 1, "end": 2, TYPE_KEY: "span"});
        let decoded = span_decoder().decode(tagged.clone()).unwrap();
        assert_eq!(decoded, Value::from(tagged));
    }

    #[test]
    fn hooks_receive_decoded_children() {
        let decoder = span_decoder().with_hook("Timeline", |map| {
            let spans = map.get("spans").and_then(Value::as_array).cloned();
            let all_decoded = spans.as_ref().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.downcast_ref::<Span>().is_some())
            });
            if !all_decoded {
                return Err(Error::hook("timeline spans were not decoded"));
            }
            Ok(Value::Array(spans.unwrap_or_default()))
        });

        let decoded = decoder
            .decode(json!({
                "spans": [
                    {"start": 0, "end": 1, TYPE_KEY: "Span"},
                    {"start": 1, "end": 4, TYPE_KEY: "Span"},
                ],
                TYPE_KEY: "Timeline",
            }))
            .unwrap();
        assert_eq!(
            decoded,
            Value::Array(vec![
                Value::extended(Span { start: 0, end: 1 }),
                Value::extended(Span { start: 1, end: 4 }),
            ])
        );
    }

    #[test]
    fn hook_errors_are_not_wrapped() {
        let err = span_decoder()
            .decode(json!([{"start": 0, TYPE_KEY: "Span"}]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Hook);
        assert_eq!(err.message(), Some("missing integer field `end`"));
    }

    #[test]
    fn custom_type_key_ignores_default_key() {
        let decoder = span_decoder().with_type_key("$type");
        let default_tagged = json!({"start": 0, "end": 1, TYPE_KEY: "Span"});
        assert_eq!(
            decoder.decode(default_tagged.clone()).unwrap(),
            Value::from(default_tagged)
        );
        let custom = json!({"start": 0, "end": 1, "$type": "Span"});
        assert_eq!(
            decoder.decode(custom).unwrap(),
            Value::extended(Span { start: 0, end: 1 })
        );
    }
}
