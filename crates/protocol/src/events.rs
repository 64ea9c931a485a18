//! Console event payloads.

use runtime::{ExecutionContextId, RemoteObject};
use serde::Deserialize;

/// Payload of `Runtime.consoleAPICalled`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleApiCalledEvent {
    /// Type of the call, kept raw until the decoder validates it.
    #[serde(rename = "type")]
    pub call_type: String,
    /// Call arguments.
    pub args: Vec<RemoteObject>,
    /// Context in which the call was made.
    pub execution_context_id: ExecutionContextId,
    /// Call timestamp.
    #[serde(default)]
    pub timestamp: f64,
    /// Stack trace captured at the call site.
    #[serde(default)]
    pub stack_trace: Option<StackTrace>,
}

/// Call frames for assertions or error messages.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackTrace {
    #[serde(default)]
    pub description: Option<String>,
    pub call_frames: Vec<CallFrame>,
}

/// Stack entry for runtime errors and assertions.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    pub function_name: String,
    pub script_id: String,
    pub url: String,
    /// 0-based.
    pub line_number: u32,
    /// 0-based.
    pub column_number: u32,
}

/// Payload of `Log.entryAdded`.
#[derive(Clone, Debug, Deserialize)]
pub struct LogEntryAddedEvent {
    pub entry: LogEntry,
}

/// Browser log entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log entry source ("javascript", "network", "worker", ...).
    pub source: String,
    /// One of verbose, info, warning, error.
    pub level: String,
    pub text: String,
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    /// Remote objects the entry refers to.
    #[serde(default)]
    pub args: Option<Vec<RemoteObject>>,
}
