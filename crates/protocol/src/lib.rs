//! Decoding of protocol console events into `ConsoleMessage` values.
//!
//! This crate provides:
//! - Payload types for `Runtime.consoleAPICalled` and `Log.entryAdded`
//! - `ConsoleDecoder`, which validates and converts those payloads
//! - `DecoderConfig`, which controls which events are surfaced

pub mod config;
pub mod decoder;
pub mod events;

pub use config::DecoderConfig;
pub use decoder::{ConsoleDecoder, Decoded};
pub use events::{CallFrame, ConsoleApiCalledEvent, LogEntry, LogEntryAddedEvent, StackTrace};

/// Protocol method carrying calls to the page's console API.
pub const CONSOLE_API_CALLED: &str = "Runtime.consoleAPICalled";

/// Protocol method carrying entries added to the browser log.
pub const LOG_ENTRY_ADDED: &str = "Log.entryAdded";
