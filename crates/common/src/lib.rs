//! Common types shared across the console client crates.

pub mod error;

pub use error::{ProtocolError, ProtocolResult};
