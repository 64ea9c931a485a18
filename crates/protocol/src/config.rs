//! Decoder configuration.

/// Controls which console events the decoder turns into messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Drop console calls reported for execution context 0.
    pub ignore_unknown_contexts: bool,
    /// Drop log entries whose source is a worker.
    pub ignore_worker_log_entries: bool,
    /// Take the message location from the top stack frame.
    pub capture_location: bool,
}

impl DecoderConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that surfaces every console event.
    pub fn permissive() -> Self {
        Self {
            ignore_unknown_contexts: false,
            ignore_worker_log_entries: false,
            ..Self::default()
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            ignore_unknown_contexts: true,
            ignore_worker_log_entries: true,
            capture_location: true,
        }
    }
}
