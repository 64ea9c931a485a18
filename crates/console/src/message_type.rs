//! Console message types.

use std::fmt;
use std::str::FromStr;

use common::ProtocolError;
use serde::{Deserialize, Serialize};

/// The supported types for console messages.
///
/// Names match the protocol strings (`"startGroupCollapsed"`, `"timeEnd"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleMessageType {
    Log,
    Debug,
    Info,
    Error,
    Warning,
    Dir,
    Dirxml,
    Table,
    Trace,
    Clear,
    StartGroup,
    StartGroupCollapsed,
    EndGroup,
    Assert,
    Profile,
    ProfileEnd,
    Count,
    TimeEnd,
    Verbose,
}

/// Coarse grouping of message types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// Carries user content (log, error, table, ...).
    Message,
    /// Opens or closes a group.
    Group,
    /// Acts on the console itself.
    Control,
    /// Profiling, counting and timing markers.
    Profiling,
}

impl ConsoleMessageType {
    pub const ALL: [ConsoleMessageType; 19] = [
        ConsoleMessageType::Log,
        ConsoleMessageType::Debug,
        ConsoleMessageType::Info,
        ConsoleMessageType::Error,
        ConsoleMessageType::Warning,
        ConsoleMessageType::Dir,
        ConsoleMessageType::Dirxml,
        ConsoleMessageType::Table,
        ConsoleMessageType::Trace,
        ConsoleMessageType::Clear,
        ConsoleMessageType::StartGroup,
        ConsoleMessageType::StartGroupCollapsed,
        ConsoleMessageType::EndGroup,
        ConsoleMessageType::Assert,
        ConsoleMessageType::Profile,
        ConsoleMessageType::ProfileEnd,
        ConsoleMessageType::Count,
        ConsoleMessageType::TimeEnd,
        ConsoleMessageType::Verbose,
    ];

    /// Protocol name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMessageType::Log => "log",
            ConsoleMessageType::Debug => "debug",
            ConsoleMessageType::Info => "info",
            ConsoleMessageType::Error => "error",
            ConsoleMessageType::Warning => "warning",
            ConsoleMessageType::Dir => "dir",
            ConsoleMessageType::Dirxml => "dirxml",
            ConsoleMessageType::Table => "table",
            ConsoleMessageType::Trace => "trace",
            ConsoleMessageType::Clear => "clear",
            ConsoleMessageType::StartGroup => "startGroup",
            ConsoleMessageType::StartGroupCollapsed => "startGroupCollapsed",
            ConsoleMessageType::EndGroup => "endGroup",
            ConsoleMessageType::Assert => "assert",
            ConsoleMessageType::Profile => "profile",
            ConsoleMessageType::ProfileEnd => "profileEnd",
            ConsoleMessageType::Count => "count",
            ConsoleMessageType::TimeEnd => "timeEnd",
            ConsoleMessageType::Verbose => "verbose",
        }
    }

    pub fn category(&self) -> MessageCategory {
        match self {
            ConsoleMessageType::StartGroup
            | ConsoleMessageType::StartGroupCollapsed
            | ConsoleMessageType::EndGroup => MessageCategory::Group,
            ConsoleMessageType::Clear => MessageCategory::Control,
            ConsoleMessageType::Profile
            | ConsoleMessageType::ProfileEnd
            | ConsoleMessageType::Count
            | ConsoleMessageType::TimeEnd => MessageCategory::Profiling,
            _ => MessageCategory::Message,
        }
    }

    /// Whether the message reports a failure (`error` or a failed `assert`).
    pub fn is_error_like(&self) -> bool {
        matches!(self, ConsoleMessageType::Error | ConsoleMessageType::Assert)
    }
}

impl fmt::Display for ConsoleMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleMessageType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsoleMessageType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ProtocolError::unknown_type(s))
    }
}
