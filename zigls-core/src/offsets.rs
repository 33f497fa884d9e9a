//! Position math for the three LSP offset encodings.
//!
//! Clients address edits by line/character pairs whose character unit depends
//! on the negotiated encoding; the store needs byte indices into its UTF-8
//! text.

use serde::Deserialize;

/// Character unit used to interpret [`Position::character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OffsetEncoding {
    /// Character counts bytes.
    Utf8,
    /// Character counts UTF-16 code units (the LSP default).
    #[default]
    Utf16,
    /// Character counts Unicode scalar values.
    Utf32,
}

/// Zero-based line/character position, interpreted under an
/// [`OffsetEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Map a position to a byte index into `text`.
///
/// Positions past the end of a line clamp to the end of that line; lines past
/// the end of the document clamp to the end of the document. A character
/// landing inside a multi-byte sequence clamps to the start of that
/// character.
#[must_use]
pub fn position_to_index(text: &str, position: Position, encoding: OffsetEncoding) -> usize {
    let mut line_start = 0usize;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => return text.len(),
        }
    }
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |newline| line_start + newline);

    let mut units = 0u32;
    for (index, ch) in text[line_start..line_end].char_indices() {
        let width = match encoding {
            OffsetEncoding::Utf8 => ch.len_utf8() as u32,
            OffsetEncoding::Utf16 => ch.len_utf16() as u32,
            OffsetEncoding::Utf32 => 1,
        };
        if units + width > position.character {
            return line_start + index;
        }
        units += width;
    }
    line_end
}

/// Map a byte index into `text` to a position. The inverse of
/// [`position_to_index`]; indices inside a multi-byte sequence round down.
#[must_use]
pub fn index_to_position(text: &str, index: usize, encoding: OffsetEncoding) -> Position {
    let index = index.min(text.len());
    let mut line = 0u32;
    let mut line_start = 0usize;
    for (byte, ch) in text.char_indices() {
        if byte >= index {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = byte + 1;
        }
    }
    let mut character = 0u32;
    for (byte, ch) in text[line_start..].char_indices() {
        if line_start + byte >= index {
            break;
        }
        character += match encoding {
            OffsetEncoding::Utf8 => ch.len_utf8() as u32,
            OffsetEncoding::Utf16 => ch.len_utf16() as u32,
            OffsetEncoding::Utf32 => 1,
        };
    }
    Position { line, character }
}
