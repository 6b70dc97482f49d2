//! Purpose: Convenience entry points mirroring serde_json's text/stream API.
//! Exports: `dump`, `dumps`, `load`, `loads`.
//! Role: Thin wrappers over `Encoder`/`Decoder` and the JSON boundary.
//! Invariants: Without an explicit encoder/decoder, the registered default is used.
//! Invariants: No logic beyond choosing the encoder/decoder and forwarding.
use std::io::{Read, Write};

use crate::core::error::Error;
use crate::core::value::Value;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::json::{parse, write};
use crate::options::DumpOptions;
use crate::registry::{registered_decoder, registered_encoder};

pub fn dump<W: Write>(
    value: &Value,
    writer: W,
    encoder: Option<&Encoder>,
    opts: &DumpOptions,
) -> Result<(), Error> {
    let json = with_encoder(encoder, |encoder| encoder.encode(value))?;
    write::to_writer(writer, &json, opts)
}

pub fn dumps(
    value: &Value,
    encoder: Option<&Encoder>,
    opts: &DumpOptions,
) -> Result<String, Error> {
    let json = with_encoder(encoder, |encoder| encoder.encode(value))?;
    write::to_string(&json, opts)
}

pub fn load<R: Read>(reader: R, decoder: Option<&Decoder>) -> Result<Value, Error> {
    let json = parse::from_reader(reader)?;
    with_decoder(decoder, |decoder| decoder.decode(json))
}

pub fn loads(text: &str, decoder: Option<&Decoder>) -> Result<Value, Error> {
    let json = parse::from_str(text)?;
    with_decoder(decoder, |decoder| decoder.decode(json))
}

fn with_encoder<T>(encoder: Option<&Encoder>, f: impl FnOnce(&Encoder) -> T) -> T {
    match encoder {
        Some(encoder) => f(encoder),
        None => f(registered_encoder().as_ref()),
    }
}

fn with_decoder<T>(decoder: Option<&Decoder>, f: impl FnOnce(&Decoder) -> T) -> T {
    match decoder {
        Some(decoder) => f(decoder),
        None => f(registered_decoder().as_ref()),
    }
}
