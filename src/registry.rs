//! Purpose: Process-wide default encoder/decoder used by the convenience entry points.
//! Exports: `register_encoder`, `register_decoder`, `registered_encoder`,
//! `registered_decoder`, `reset_encoder`, `reset_decoder`.
//! Role: Lets callers pick a default without threading it through every call.
//! Invariants: Exactly one default of each kind; the last registration wins.
//! Invariants: Before any registration, the plain (hook-free) encoder/decoder is the default.
//! Notes: Registering from several threads at once is a caller hazard; the lock only
//! keeps each swap atomic, it does not order competing registrations.
use std::sync::Arc;

use parking_lot::{RwLock, const_rwlock};
use tracing::debug;

use crate::decoder::Decoder;
use crate::encoder::Encoder;

static DEFAULT_ENCODER: RwLock<Option<Arc<Encoder>>> = const_rwlock(None);
static DEFAULT_DECODER: RwLock<Option<Arc<Decoder>>> = const_rwlock(None);

/// Makes `encoder` the default for `dump`/`dumps` and hands it back unchanged.
pub fn register_encoder(encoder: Arc<Encoder>) -> Arc<Encoder> {
    debug!(hooks = ?encoder.hook_names(), "registering default encoder");
    *DEFAULT_ENCODER.write() = Some(Arc::clone(&encoder));
    encoder
}

/// Makes `decoder` the default for `load`/`loads` and hands it back unchanged.
pub fn register_decoder(decoder: Arc<Decoder>) -> Arc<Decoder> {
    debug!(hooks = ?decoder.hook_names(), "registering default decoder");
    *DEFAULT_DECODER.write() = Some(Arc::clone(&decoder));
    decoder
}

pub fn registered_encoder() -> Arc<Encoder> {
    DEFAULT_ENCODER
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(Encoder::new()))
}

pub fn registered_decoder() -> Arc<Decoder> {
    DEFAULT_DECODER
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(Decoder::new()))
}

/// Restores the plain encoder as the default.
pub fn reset_encoder() {
    debug!("resetting default encoder");
    *DEFAULT_ENCODER.write() = None;
}

/// Restores the plain decoder as the default.
pub fn reset_decoder() {
    debug!("resetting default decoder");
    *DEFAULT_DECODER.write() = None;
}
