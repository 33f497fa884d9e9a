#![deny(clippy::pedantic)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
//! Lightweight syntax analysis for Zig source.
//!
//! This is not a full Zig parser. It is a single lexical pass that recognizes
//! exactly what the document store consumes: `@import("...")` strings,
//! `@cImport(...)` bodies, `error{...}` sets and `error.Tag` references, and
//! enum member lists. Comments and string literals are skipped so that
//! occurrences inside them are never misread as code.

use std::fmt::Write as _;

mod scope;

pub use scope::DocumentScope;

/// Byte offset of a recognized construct in its document.
///
/// Node indices are not stable across edits; anything that must survive an
/// edit is keyed by content instead (see the C-import cache).
pub type NodeIndex = u32;

#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),

    #[error("unterminated @cImport argument list starting at byte {0}")]
    UnterminatedCImport(usize),

    #[error("unbalanced delimiter starting at byte {0}")]
    UnbalancedDelimiter(usize),
}

impl ParseError {
    /// Byte offset of the construct the pass gave up on.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString(offset)
            | Self::UnterminatedCImport(offset)
            | Self::UnbalancedDelimiter(offset) => *offset,
        }
    }
}

/// One `@import("...")` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub node: NodeIndex,
    /// The raw import string, exactly as written between the quotes.
    pub name: String,
}

/// One directive inside a `@cImport` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CDirective {
    Include(String),
    Define { name: String, value: Option<String> },
    Undef(String),
}

/// Marker for `@cImport` bodies that cannot be expressed as C source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CImportNode {
    node: NodeIndex,
    directives: Vec<CDirective>,
    supported: bool,
}

/// Result of one analysis pass over a document.
#[derive(Debug, Default)]
pub struct Tree {
    imports: Vec<Import>,
    c_imports: Vec<CImportNode>,
    error_tags: Vec<String>,
    enum_tags: Vec<String>,
}

impl Tree {
    #[must_use]
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Raw import strings, in document order.
    pub fn import_strs(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|import| import.name.as_str())
    }

    /// Node indices of every `@cImport` expression, in document order.
    #[must_use]
    pub fn c_import_nodes(&self) -> Vec<NodeIndex> {
        self.c_imports.iter().map(|c_import| c_import.node).collect()
    }

    pub(crate) fn error_tags(&self) -> &[String] {
        &self.error_tags
    }

    pub(crate) fn enum_tags(&self) -> &[String] {
        &self.enum_tags
    }

    fn c_import(&self, node: NodeIndex) -> Option<&CImportNode> {
        self.c_imports.iter().find(|c_import| c_import.node == node)
    }
}

/// Render the C source embedded in the `@cImport` at `node`.
///
/// # Errors
///
/// Returns [`Unsupported`] when the body contains anything other than
/// `@cInclude`, `@cDefine` and `@cUndef` directives with literal arguments,
/// or when `node` is not a C import of this tree.
pub fn convert_c_include(tree: &Tree, node: NodeIndex) -> Result<String, Unsupported> {
    let c_import = tree.c_import(node).ok_or(Unsupported)?;
    if !c_import.supported {
        return Err(Unsupported);
    }
    let mut source = String::new();
    for directive in &c_import.directives {
        match directive {
            CDirective::Include(path) => {
                let _ = writeln!(source, "#include <{path}>");
            }
            CDirective::Define {
                name,
                value: Some(value),
            } => {
                let _ = writeln!(source, "#define {name} {value}");
            }
            CDirective::Define { name, value: None } => {
                let _ = writeln!(source, "#define {name}");
            }
            CDirective::Undef(name) => {
                let _ = writeln!(source, "#undef {name}");
            }
        }
    }
    Ok(source)
}

/// Analyze one document.
///
/// # Errors
///
/// Fails on unterminated string literals and unbalanced delimiters inside the
/// constructs the pass descends into.
pub fn parse(text: &str) -> Result<Tree, ParseError> {
    Scanner::new(text).scan()
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_decl_keyword(ident: &str) -> bool {
    matches!(
        ident,
        "pub"
            | "fn"
            | "const"
            | "var"
            | "comptime"
            | "usingnamespace"
            | "test"
            | "struct"
            | "union"
            | "opaque"
            | "extern"
            | "packed"
            | "inline"
            | "noinline"
            | "threadlocal"
    )
}

enum CArg {
    Str(String),
    Void,
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    tree: Tree,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            tree: Tree::default(),
        }
    }

    fn scan(mut self) -> Result<Tree, ParseError> {
        while let Some(byte) = self.peek() {
            match byte {
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                // Multiline string literals run to the end of the line.
                b'\\' if self.peek_at(1) == Some(b'\\') => self.skip_line(),
                b'"' => self.skip_string()?,
                b'\'' => self.skip_char_literal()?,
                b'@' => self.scan_builtin()?,
                byte if is_ident_start(byte) => self.scan_identifier()?,
                _ => self.pos += 1,
            }
        }
        Ok(self.tree)
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_line(&mut self) {
        match self.text[self.pos..].find('\n') {
            Some(newline) => self.pos += newline + 1,
            None => self.pos = self.text.len(),
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                byte if byte.is_ascii_whitespace() => self.pos += 1,
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                _ => break,
            }
        }
    }

    fn skip_string(&mut self) -> Result<(), ParseError> {
        self.read_string_literal().map(|_| ())
    }

    fn read_string_literal(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.pos += 1;
        let content_start = self.pos;
        loop {
            match self.peek() {
                None | Some(b'\n') => return Err(ParseError::UnterminatedString(start)),
                Some(b'\\') => self.pos += 2,
                Some(b'"') => {
                    let content = self.text[content_start..self.pos].to_string();
                    self.pos += 1;
                    return Ok(content);
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn skip_char_literal(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek() {
                None | Some(b'\n') => return Err(ParseError::UnterminatedString(start)),
                Some(b'\\') => self.pos += 2,
                Some(b'\'') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    fn scan_builtin(&mut self) -> Result<(), ParseError> {
        let node = u32::try_from(self.pos).unwrap_or(u32::MAX);
        self.pos += 1;
        if self.peek() == Some(b'"') {
            // @"quoted identifier"
            return self.skip_string();
        }
        match self.read_identifier() {
            "import" => self.scan_import(node),
            "cImport" => self.scan_c_import(node),
            _ => Ok(()),
        }
    }

    fn scan_import(&mut self, node: NodeIndex) -> Result<(), ParseError> {
        self.skip_trivia();
        if self.peek() != Some(b'(') {
            return Ok(());
        }
        self.pos += 1;
        self.skip_trivia();
        if self.peek() != Some(b'"') {
            return Ok(());
        }
        let name = self.read_string_literal()?;
        self.tree.imports.push(Import { node, name });
        Ok(())
    }

    fn scan_c_import(&mut self, node: NodeIndex) -> Result<(), ParseError> {
        let start = self.pos;
        self.skip_trivia();
        if self.peek() != Some(b'(') {
            return Ok(());
        }
        self.pos += 1;
        let mut depth = 1usize;
        let mut directives = Vec::new();
        let mut supported = true;
        while depth > 0 {
            let Some(byte) = self.peek() else {
                return Err(ParseError::UnterminatedCImport(start));
            };
            match byte {
                b'(' => {
                    depth += 1;
                    self.pos += 1;
                }
                b')' => {
                    depth -= 1;
                    self.pos += 1;
                }
                b'{' | b'}' | b';' | b',' => self.pos += 1,
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                b'"' => self.skip_string()?,
                b'\'' => self.skip_char_literal()?,
                b'@' => {
                    self.pos += 1;
                    let name = self.read_identifier().to_string();
                    let args = self.scan_directive_args()?;
                    match (name.as_str(), args) {
                        ("cInclude", Some(args)) => match args.as_slice() {
                            [CArg::Str(path)] => {
                                directives.push(CDirective::Include(path.clone()));
                            }
                            _ => supported = false,
                        },
                        ("cDefine", Some(args)) => match args.as_slice() {
                            [CArg::Str(name), CArg::Str(value)] => {
                                directives.push(CDirective::Define {
                                    name: name.clone(),
                                    value: Some(value.clone()),
                                });
                            }
                            [CArg::Str(name), CArg::Void] => {
                                directives.push(CDirective::Define {
                                    name: name.clone(),
                                    value: None,
                                });
                            }
                            _ => supported = false,
                        },
                        ("cUndef", Some(args)) => match args.as_slice() {
                            [CArg::Str(name)] => {
                                directives.push(CDirective::Undef(name.clone()));
                            }
                            _ => supported = false,
                        },
                        _ => supported = false,
                    }
                }
                byte if byte.is_ascii_whitespace() => self.pos += 1,
                _ => {
                    supported = false;
                    self.pos += 1;
                }
            }
        }
        self.tree.c_imports.push(CImportNode {
            node,
            directives,
            supported,
        });
        Ok(())
    }

    /// Consume a directive's parenthesized argument list, including its
    /// closing paren. `None` means the arguments were not all literals.
    fn scan_directive_args(&mut self) -> Result<Option<Vec<CArg>>, ParseError> {
        self.skip_trivia();
        if self.peek() != Some(b'(') {
            return Ok(None);
        }
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1usize;
        let mut args = Some(Vec::new());
        while depth > 0 {
            let Some(byte) = self.peek() else {
                return Err(ParseError::UnterminatedCImport(start));
            };
            match byte {
                b')' => {
                    depth -= 1;
                    self.pos += 1;
                }
                b'(' => {
                    depth += 1;
                    self.pos += 1;
                    args = None;
                }
                b'"' if depth == 1 => {
                    let literal = self.read_string_literal()?;
                    if let Some(list) = args.as_mut() {
                        list.push(CArg::Str(literal));
                    }
                }
                b'"' => self.skip_string()?,
                b'{' if depth == 1 => {
                    self.pos += 1;
                    self.skip_trivia();
                    if self.peek() == Some(b'}') {
                        self.pos += 1;
                        if let Some(list) = args.as_mut() {
                            list.push(CArg::Void);
                        }
                    } else {
                        args = None;
                    }
                }
                b',' => self.pos += 1,
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                byte if byte.is_ascii_whitespace() => self.pos += 1,
                _ => {
                    args = None;
                    self.pos += 1;
                }
            }
        }
        Ok(args)
    }

    fn scan_identifier(&mut self) -> Result<(), ParseError> {
        match self.read_identifier() {
            "error" => self.scan_error(),
            "enum" => self.scan_enum(),
            _ => Ok(()),
        }
    }

    fn scan_error(&mut self) -> Result<(), ParseError> {
        self.skip_trivia();
        match self.peek() {
            Some(b'{') => {
                self.pos += 1;
                loop {
                    self.skip_trivia();
                    match self.peek() {
                        Some(b'}') => {
                            self.pos += 1;
                            break;
                        }
                        Some(b',') => self.pos += 1,
                        Some(byte) if is_ident_start(byte) => {
                            let tag = self.read_identifier().to_string();
                            self.tree.error_tags.push(tag);
                        }
                        Some(_) => self.pos += 1,
                        None => break,
                    }
                }
            }
            Some(b'.') => {
                self.pos += 1;
                self.skip_trivia();
                if self.peek().is_some_and(is_ident_start) {
                    let tag = self.read_identifier().to_string();
                    self.tree.error_tags.push(tag);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn scan_enum(&mut self) -> Result<(), ParseError> {
        self.skip_trivia();
        if self.peek() == Some(b'(') {
            // Explicit tag type, e.g. enum(u8).
            self.skip_balanced(b'(', b')')?;
            self.skip_trivia();
        }
        if self.peek() != Some(b'{') {
            return Ok(());
        }
        self.pos += 1;
        let mut expect_member = true;
        loop {
            self.skip_trivia();
            let Some(byte) = self.peek() else {
                break;
            };
            match byte {
                b'}' => {
                    self.pos += 1;
                    break;
                }
                b',' | b';' => {
                    expect_member = true;
                    self.pos += 1;
                }
                b'{' => {
                    self.skip_balanced(b'{', b'}')?;
                    expect_member = true;
                }
                b'(' => self.skip_balanced(b'(', b')')?,
                b'"' => self.skip_string()?,
                b'\'' => self.skip_char_literal()?,
                b'@' => {
                    self.pos += 1;
                    if self.peek() == Some(b'"') {
                        self.skip_string()?;
                    } else {
                        self.read_identifier();
                    }
                    expect_member = false;
                }
                byte if is_ident_start(byte) => {
                    let ident = self.read_identifier().to_string();
                    if is_decl_keyword(&ident) {
                        expect_member = false;
                    } else if expect_member {
                        self.skip_trivia();
                        if matches!(self.peek(), Some(b',' | b'}' | b'=')) {
                            self.tree.enum_tags.push(ident);
                        }
                    }
                }
                _ => {
                    self.pos += 1;
                    expect_member = false;
                }
            }
        }
        Ok(())
    }

    fn skip_balanced(&mut self, open: u8, close: u8) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1usize;
        while depth > 0 {
            let Some(byte) = self.peek() else {
                return Err(ParseError::UnbalancedDelimiter(start));
            };
            match byte {
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                b'"' => self.skip_string()?,
                b'\'' => self.skip_char_literal()?,
                byte if byte == open => {
                    depth += 1;
                    self.pos += 1;
                }
                byte if byte == close => {
                    depth -= 1;
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        Ok(())
    }
}
