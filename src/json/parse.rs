//! Purpose: Provide the runtime JSON decode entrypoints.
//! Exports: `from_str`, `from_reader`, `map_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Parse failures never leak payload text into error messages beyond serde_json's own.
//! Notes: Object hooks run after parsing, in `Decoder::decode`.

use std::io::Read;

use serde_json::error::Category;

use crate::core::error::{Error, ErrorKind};

pub(crate) fn from_str(input: &str) -> Result<serde_json::Value, Error> {
    serde_json::from_str(input).map_err(|err| map_error(err, "parse json text"))
}

pub(crate) fn from_reader<R: Read>(reader: R) -> Result<serde_json::Value, Error> {
    serde_json::from_reader(reader).map_err(|err| map_error(err, "parse json stream"))
}

pub(crate) fn category_kind(category: Category) -> ErrorKind {
    match category {
        Category::Io => ErrorKind::Io,
        Category::Syntax | Category::Eof => ErrorKind::Syntax,
        Category::Data => ErrorKind::Data,
    }
}

pub(crate) fn map_error(err: serde_json::Error, context: &str) -> Error {
    Error::new(category_kind(err.classify()))
        .with_message(format!("failed to {context}: {err}"))
        .with_source(err)
}
