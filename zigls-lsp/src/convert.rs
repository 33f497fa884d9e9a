//! Type conversions between LSP types and the document store's inputs.

use tower_lsp::lsp_types::TextDocumentContentChangeEvent;
use zigls_core::offsets::{Position, Range};

use crate::store::Change;

#[must_use]
pub fn position_from_lsp(position: tower_lsp::lsp_types::Position) -> Position {
    Position {
        line: position.line,
        character: position.character,
    }
}

#[must_use]
pub fn range_from_lsp(range: tower_lsp::lsp_types::Range) -> Range {
    Range {
        start: position_from_lsp(range.start),
        end: position_from_lsp(range.end),
    }
}

#[must_use]
pub fn position_to_lsp(position: Position) -> tower_lsp::lsp_types::Position {
    tower_lsp::lsp_types::Position {
        line: position.line,
        character: position.character,
    }
}

/// A change event without a range is a whole-document replacement.
#[must_use]
pub fn change_from_lsp(event: TextDocumentContentChangeEvent) -> Change {
    match event.range {
        Some(range) => Change::Incremental {
            range: range_from_lsp(range),
            text: event.text,
        },
        None => Change::Full { text: event.text },
    }
}
