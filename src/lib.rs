//! Purpose: Extensible JSON encoding over serde_json via per-type hooks.
//! Exports: `Encoder`, `Decoder`, `Value`, `Extended`, convenience `dump`/`dumps`/`load`/`loads`,
//! and the default-registration functions.
//! Role: Library crate; application types travel as mappings tagged with their type name.
//! Invariants: Untagged and unknown-tag mappings always decode to themselves.
//! Invariants: The only process-wide state is the default encoder/decoder registration.
pub mod api;
pub mod core;
pub mod decoder;
pub mod encoder;
mod json;
pub mod options;
pub mod registry;

pub use api::{dump, dumps, load, loads};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::value::{DynExtended, Extended, Object, Value, type_name_of};
pub use decoder::Decoder;
pub use encoder::{Encoder, TYPE_KEY};
pub use options::DumpOptions;
pub use registry::{
    register_decoder, register_encoder, registered_decoder, registered_encoder, reset_decoder,
    reset_encoder,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
