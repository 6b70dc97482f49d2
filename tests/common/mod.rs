//! Purpose: Shared fixtures for integration tests.
//! Exports: `Complex`, `Marker`, encoder/decoder builders, `init_tracing`.
//! Role: Keep hook definitions identical across test binaries.
#![allow(dead_code)]

use extjson::{Decoder, Encoder, Error, Extended, Object, Value};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}

impl Extended for Complex {}

/// Type carrying no data; encodes to an empty mapping plus its tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker;

impl Extended for Marker {}

pub const COMPLEX_NUMBERS: [(f64, f64); 4] =
    [(0.0, 0.0), (1.0, 2.0), (-3.0, 6.0), (-3.25, 42.73)];

pub fn complex_encoder() -> Encoder {
    Encoder::new().with_hook(|c: &Complex| {
        Ok(Object::from([
            ("real".to_string(), Value::from(c.real)),
            ("imag".to_string(), Value::from(c.imag)),
        ]))
    })
}

pub fn complex_decoder() -> Decoder {
    Decoder::new().with_type(|map: &Object| {
        let part = |key: &str| {
            map.get(key)
                .and_then(Value::as_f64)
                .ok_or_else(|| Error::hook(format!("complex mapping lacks `{key}`")))
        };
        Ok(Complex::new(part("real")?, part("imag")?))
    })
}

pub fn marker_encoder() -> Encoder {
    Encoder::new().with_hook(|_: &Marker| Ok(Object::new()))
}

pub fn marker_decoder() -> Decoder {
    Decoder::new().with_type(|_: &Object| Ok(Marker))
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
