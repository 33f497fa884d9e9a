//! Per-document state retained by the store.

use url::Url;
use zigls_analysis::{DocumentScope, NodeIndex, Tree};

use crate::store::translate::TranslationResult;

/// One C import in a document: the node it came from, the content hash of
/// the generated C source, and the translator's verdict. The hash is the
/// cache key; node indices do not survive edits.
#[derive(Debug, Clone)]
pub struct CImportRecord {
    pub node: NodeIndex,
    pub hash: [u8; 16],
    pub result: TranslationResult,
}

/// In-memory record for one source document retained by the store.
///
/// A handle stays alive while `count` is positive: one per client open plus
/// one per `imports_used` entry in another handle pointing here, plus one
/// held by a build-file descriptor for its own script.
#[derive(Debug)]
pub struct Handle {
    pub(crate) count: usize,
    pub(crate) uri: Url,
    pub(crate) text: String,
    pub(crate) tree: Tree,
    pub(crate) document_scope: DocumentScope,
    pub(crate) import_uris: Vec<Url>,
    pub(crate) c_imports: Vec<CImportRecord>,
    pub(crate) imports_used: Vec<Url>,
    pub(crate) associated_build_file: Option<Url>,
    pub(crate) is_build_file: bool,
}

impl Handle {
    /// Number of holders keeping this handle alive.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn document_scope(&self) -> &DocumentScope {
        &self.document_scope
    }

    /// Resolved URIs, one per textual import that resolved to something.
    #[must_use]
    pub fn import_uris(&self) -> &[Url] {
        &self.import_uris
    }

    #[must_use]
    pub fn c_imports(&self) -> &[CImportRecord] {
        &self.c_imports
    }

    /// The imports this document has actually retained; each entry holds one
    /// reference count on its target.
    #[must_use]
    pub fn imports_used(&self) -> &[Url] {
        &self.imports_used
    }

    /// URI of the build file that provides package visibility and C include
    /// paths for this document, if any.
    #[must_use]
    pub fn associated_build_file(&self) -> Option<&Url> {
        self.associated_build_file.as_ref()
    }

    /// Whether this document is itself a build script with a descriptor in
    /// the build-file registry.
    #[must_use]
    pub fn is_build_file(&self) -> bool {
        self.is_build_file
    }
}
