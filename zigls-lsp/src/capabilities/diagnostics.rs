//! Diagnostics: surface analysis failures in the editor.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Range};
use zigls_analysis::ParseError;
use zigls_core::offsets::{index_to_position, OffsetEncoding};

use crate::convert::position_to_lsp;

/// Convert an analysis failure to a point diagnostic at the offending byte.
#[must_use]
pub fn parse_error_to_diagnostic(
    text: &str,
    error: &ParseError,
    encoding: OffsetEncoding,
) -> Diagnostic {
    let position = position_to_lsp(index_to_position(text, error.offset(), encoding));
    Diagnostic {
        range: Range {
            start: position,
            end: position,
        },
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some("zigls".to_string()),
        message: error.to_string(),
        ..Default::default()
    }
}
