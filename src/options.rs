//! Purpose: Output formatting options passed through to the base serializer.
//! Exports: `DumpOptions`.
//! Role: Configuration for `dump`/`dumps`; loadable from any serde source.
//! Invariants: Defaults produce compact output in insertion order.
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DumpOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit object keys in sorted order instead of insertion order.
    pub sort_keys: bool,
}

impl DumpOptions {
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            sort_keys: false,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
