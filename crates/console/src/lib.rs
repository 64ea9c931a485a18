//! Console messages observed from an instrumented page.
//!
//! A `ConsoleMessage` is created once, when the protocol layer decodes a
//! console event, and is read-only afterwards.

pub mod location;
pub mod message;
pub mod message_type;

pub use location::ConsoleMessageLocation;
pub use message::ConsoleMessage;
pub use message_type::{ConsoleMessageType, MessageCategory};
