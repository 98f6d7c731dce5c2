//! Injected observability sink.
//!
//! The calculator reports progress and non-fatal conditions through a
//! [`CalcSink`] handed in by the caller instead of a process-wide logger,
//! so warnings are observable in tests without global state.

use std::sync::Mutex;

/// Structured event sink for calculator diagnostics.
pub trait CalcSink: Send + Sync {
    /// Report routine progress.
    fn info(&self, message: &str);

    /// Report a non-fatal condition; computation continues with a
    /// well-defined degenerate result.
    fn warning(&self, message: &str);
}

/// Sink that forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl CalcSink for LogSink {
    fn info(&self, message: &str) {
        log::info!(target: "catrisk", "{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!(target: "catrisk", "{message}");
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CalcSink for NullSink {
    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}

/// Sink that records messages for later assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported through [`CalcSink::info`] so far.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Messages reported through [`CalcSink::warning`] so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl CalcSink for RecordingSink {
    fn info(&self, message: &str) {
        if let Ok(mut infos) = self.infos.lock() {
            infos.push(message.to_string());
        }
    }

    fn warning(&self, message: &str) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_captures_by_level() {
        let sink = RecordingSink::new();
        sink.info("starting");
        sink.warning("no affected exposures");
        sink.info("done");

        assert_eq!(sink.infos(), vec!["starting".to_string(), "done".to_string()]);
        assert_eq!(sink.warnings(), vec!["no affected exposures".to_string()]);
    }

    #[test]
    fn null_sink_is_silent() {
        let sink = NullSink;
        sink.info("ignored");
        sink.warning("ignored");
    }
}
