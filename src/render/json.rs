//! JSON rendering for documents.

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::Result;
use crate::model::Document;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// Empty containers are left out. The text index is not serialized.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Convert any model value to JSON, reporting failure instead of raising it.
///
/// Returns `None` on failure; the error goes to `sink`.
pub fn to_json_lossy<T: Serialize + ?Sized>(
    value: &T,
    format: JsonFormat,
    sink: &mut dyn DiagnosticSink,
) -> Option<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    match result {
        Ok(json) => Some(json),
        Err(e) => {
            sink.report(Diagnostic {
                message: "JSON serialization failed".to_string(),
                detail: format!("{:?}", e),
            });
            None
        }
    }
}

/// Pretty-printed JSON of a document, with failures logged.
pub fn to_pretty_string(doc: &Document) -> Option<String> {
    to_json_lossy(doc, JsonFormat::Pretty, &mut LogSink)
}
