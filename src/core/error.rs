//! Purpose: Single error type for encoding, decoding, and hook failures.
//! Exports: `Error`, `ErrorKind`.
//! Role: Shared error model for the encoder, decoder, and convenience entry points.
//! Invariants: Errors returned by user hooks pass through callers untouched.
//! Invariants: Kind labels are stable; context fields are additive-only.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Extended value with no encode hook registered for its type.
    Unserializable,
    /// An encode hook emitted the reserved tag key itself.
    ReservedKey,
    /// Raised by a user hook.
    Hook,
    Syntax,
    Data,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    type_name: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            type_name: None,
            source: None,
        }
    }

    /// Shorthand for hook implementations reporting their own failure.
    pub fn hook(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hook).with_message(message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {type_name})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io)
            .with_message(err.to_string())
            .with_source(err)
    }
}
