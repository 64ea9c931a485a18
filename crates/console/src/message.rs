//! Console message value.

use std::sync::Arc;

use runtime::JsHandle;

use crate::location::ConsoleMessageLocation;
use crate::message_type::ConsoleMessageType;

/// A message a page wrote to its console.
///
/// Argument handles are shared with the handle-lifecycle side; the message
/// never disposes them.
#[derive(Clone, Debug)]
pub struct ConsoleMessage {
    message_type: ConsoleMessageType,
    text: String,
    args: Vec<Arc<JsHandle>>,
    location: ConsoleMessageLocation,
}

impl ConsoleMessage {
    /// Create a console message.
    pub fn new(
        message_type: ConsoleMessageType,
        text: impl Into<String>,
        args: Vec<Arc<JsHandle>>,
        location: ConsoleMessageLocation,
    ) -> Self {
        Self {
            message_type,
            text: text.into(),
            args,
            location,
        }
    }

    /// Create a console message whose location is unknown.
    pub fn without_location(
        message_type: ConsoleMessageType,
        text: impl Into<String>,
        args: Vec<Arc<JsHandle>>,
    ) -> Self {
        Self::new(message_type, text, args, ConsoleMessageLocation::default())
    }

    /// The type of the console message.
    pub fn message_type(&self) -> ConsoleMessageType {
        self.message_type
    }

    /// The text of the console message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The arguments passed to the console call, in call order.
    pub fn args(&self) -> &[Arc<JsHandle>] {
        &self.args
    }

    /// The location of the console message.
    pub fn location(&self) -> ConsoleMessageLocation {
        self.location.clone()
    }
}
