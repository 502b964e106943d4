//! Diagnostic sinks for failures that are reported instead of raised.

/// A reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short description
    pub message: String,

    /// Underlying error detail
    pub detail: String,
}

/// Receives diagnostics from soft-failing operations.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::error!("{}", diagnostic.message);
        log::debug!("{}", diagnostic.detail);
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    /// Diagnostics in report order
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if anything was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.report(Diagnostic {
            message: "serialization failed".to_string(),
            detail: "key must be a string".to_string(),
        });
        assert_eq!(sink.diagnostics.len(), 1);
        assert_eq!(sink.diagnostics[0].message, "serialization failed");
    }
}
