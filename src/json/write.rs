//! Purpose: Render encoded trees as JSON text.
//! Exports: `to_writer`, `to_string`.
//! Role: Writer boundary applying `DumpOptions` on top of serde_json formatting.
//! Invariants: With default options, output equals `serde_json::to_string`.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};
use crate::json::parse::map_error;
use crate::options::DumpOptions;

pub(crate) fn to_writer<W: Write>(
    writer: W,
    value: &Value,
    opts: &DumpOptions,
) -> Result<(), Error> {
    let sorted;
    let value = if opts.sort_keys {
        sorted = sort_keys(value.clone());
        &sorted
    } else {
        value
    };

    let result = match opts.indent {
        Some(width) => {
            let indent = vec![b' '; width];
            let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
            value.serialize(&mut ser)
        }
        None => {
            let mut ser = Serializer::new(writer);
            value.serialize(&mut ser)
        }
    };
    result.map_err(|err| map_error(err, "write json"))
}

pub(crate) fn to_string(value: &Value, opts: &DumpOptions) -> Result<String, Error> {
    let mut out = Vec::new();
    to_writer(&mut out, value, opts)?;
    String::from_utf8(out).map_err(|err| {
        Error::new(ErrorKind::Data)
            .with_message("serializer produced invalid utf-8")
            .with_source(err)
    })
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::to_string;
    use crate::options::DumpOptions;
    use serde_json::json;

    #[test]
    fn default_options_match_serde_json() {
        let value = json!({"b": 1, "a": [1, 2, {"c": null}]});
        let text = to_string(&value, &DumpOptions::default()).unwrap();
        assert_eq!(text, serde_json::to_string(&value).unwrap());
        assert_eq!(text, r#"{"b":1,"a":[1,2,{"c":null}]}"#);
    }

    #[test]
    fn sort_keys_applies_at_every_depth() {
        let value = json!({"b": {"z": 1, "y": 2}, "a": 0});
        let opts = DumpOptions::default().with_sort_keys(true);
        let text = to_string(&value, &opts).unwrap();
        assert_eq!(text, r#"{"a":0,"b":{"y":2,"z":1}}"#);
    }

    #[test]
    fn non_ascii_text_is_kept_verbatim() {
        let value = json!({"snow": "\u{2603}", "name": "Zoë"});
        let text = to_string(&value, &DumpOptions::default()).unwrap();
        assert_eq!(text, "{\"snow\":\"\u{2603}\",\"name\":\"Zoë\"}");
    }

    #[test]
    fn indent_uses_requested_width() {
        let value = json!({"a": [1]});
        let text = to_string(&value, &DumpOptions::default().with_indent(4)).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }
}
