//! Per-graph configuration.

/// Configuration carried by every [`Graph`](crate::graph::Graph).
///
/// `debug` turns on diagnostic messages (mutation failures, path search
/// direction and outcome) through the `log` facade. It never changes what
/// an operation returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Emit diagnostics via `log`.
    pub debug: bool,
}

impl GraphConfig {
    /// Config with diagnostics off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagnostics toggle.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
