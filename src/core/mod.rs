// Core modules implementing the value tree and error modeling.
pub mod error;
pub mod value;
