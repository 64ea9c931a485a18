//! Console event decoding.

use std::sync::Arc;

use common::ProtocolResult;
use console::{ConsoleMessage, ConsoleMessageLocation, ConsoleMessageType};
use runtime::JsHandle;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::events::{ConsoleApiCalledEvent, LogEntryAddedEvent, StackTrace};
use crate::{CONSOLE_API_CALLED, LOG_ENTRY_ADDED};

/// Levels a `Log.entryAdded` entry may carry.
const LOG_ENTRY_LEVELS: [ConsoleMessageType; 4] = [
    ConsoleMessageType::Verbose,
    ConsoleMessageType::Info,
    ConsoleMessageType::Warning,
    ConsoleMessageType::Error,
];

/// Result of decoding one console event.
#[derive(Clone, Debug, Default)]
pub struct Decoded {
    /// The message to deliver, if the event produces one.
    pub message: Option<ConsoleMessage>,
    /// Remote object ids the caller must release; nothing else refers to them.
    pub objects_to_release: Vec<String>,
}

impl Decoded {
    fn from_message(message: ConsoleMessage) -> Self {
        Self {
            message: Some(message),
            objects_to_release: Vec::new(),
        }
    }
}

/// Turns protocol console events into console messages.
#[derive(Clone, Debug, Default)]
pub struct ConsoleDecoder {
    config: DecoderConfig,
}

impl ConsoleDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode an event by protocol method name.
    ///
    /// Returns `Ok(None)` for methods that do not carry console output.
    pub fn decode_event(&self, method: &str, params: &Value) -> ProtocolResult<Option<Decoded>> {
        match method {
            CONSOLE_API_CALLED => {
                let event = ConsoleApiCalledEvent::deserialize(params)?;
                let message = self.decode_console_api_called(&event)?;
                Ok(Some(message.map(Decoded::from_message).unwrap_or_default()))
            }
            LOG_ENTRY_ADDED => {
                let event = LogEntryAddedEvent::deserialize(params)?;
                self.decode_log_entry(&event).map(Some)
            }
            _ => {
                trace!(method, "not a console event");
                Ok(None)
            }
        }
    }

    /// Decode a `Runtime.consoleAPICalled` payload.
    pub fn decode_console_api_called(
        &self,
        event: &ConsoleApiCalledEvent,
    ) -> ProtocolResult<Option<ConsoleMessage>> {
        if event.execution_context_id == 0 && self.config.ignore_unknown_contexts {
            trace!(call_type = %event.call_type, "ignoring console call from unknown context");
            return Ok(None);
        }

        let message_type = parse_type(&event.call_type)?;

        let args: Vec<Arc<JsHandle>> = event
            .args
            .iter()
            .map(|arg| Arc::new(JsHandle::new(event.execution_context_id, arg.clone())))
            .collect();

        let text = render_text(&args)?;

        let location = match &event.stack_trace {
            Some(stack_trace) if self.config.capture_location => top_frame_location(stack_trace),
            _ => ConsoleMessageLocation::default(),
        };

        debug!(%message_type, args = args.len(), "decoded console call");
        Ok(Some(ConsoleMessage::new(message_type, text, args, location)))
    }

    /// Decode a `Log.entryAdded` payload.
    ///
    /// Log entries never carry argument handles; any remote objects they
    /// reference are handed back for release, including when the entry is
    /// dropped or its level is rejected.
    pub fn decode_log_entry(&self, event: &LogEntryAddedEvent) -> ProtocolResult<Decoded> {
        let entry = &event.entry;

        let objects_to_release: Vec<String> = entry
            .args
            .iter()
            .flatten()
            .filter_map(|arg| arg.object_id.clone())
            .collect();

        if entry.source == "worker" && self.config.ignore_worker_log_entries {
            trace!("ignoring worker log entry");
            return Ok(Decoded {
                message: None,
                objects_to_release,
            });
        }

        let message_type = match entry.level.parse::<ConsoleMessageType>() {
            Ok(message_type) if LOG_ENTRY_LEVELS.contains(&message_type) => message_type,
            _ => {
                warn!(level = %entry.level, "dropping log entry with unknown level");
                return Ok(Decoded {
                    message: None,
                    objects_to_release,
                });
            }
        };

        let mut location = ConsoleMessageLocation::new();
        if self.config.capture_location {
            location.url = entry.url.clone();
            location.line_number = entry.line_number;
        }

        debug!(%message_type, source = %entry.source, "decoded log entry");
        Ok(Decoded {
            message: Some(ConsoleMessage::new(message_type, entry.text.clone(), Vec::new(), location)),
            objects_to_release,
        })
    }
}

fn parse_type(name: &str) -> ProtocolResult<ConsoleMessageType> {
    name.parse().map_err(|err| {
        warn!(name, "unknown console message type");
        err
    })
}

/// Join one token per argument with single spaces.
fn render_text(args: &[Arc<JsHandle>]) -> ProtocolResult<String> {
    let mut tokens = Vec::with_capacity(args.len());
    for arg in args {
        let remote_object = arg.remote_object();
        if remote_object.is_reference() {
            tokens.push(arg.to_string());
        } else {
            tokens.push(remote_object.primitive_value()?.to_string());
        }
    }
    Ok(tokens.join(" "))
}

fn top_frame_location(stack_trace: &StackTrace) -> ConsoleMessageLocation {
    match stack_trace.call_frames.first() {
        Some(frame) => ConsoleMessageLocation {
            url: Some(frame.url.clone()),
            line_number: Some(frame.line_number),
            column_number: Some(frame.column_number),
        },
        None => ConsoleMessageLocation::default(),
    }
}
