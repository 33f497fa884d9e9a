//! The document store: the authoritative in-memory representation of every
//! source file the server has been asked about, together with the build
//! graph that contextualizes it.
//!
//! Handles are reference counted. A count is held by each client open, by
//! each `imports_used` entry in another handle, and by a build-file
//! descriptor for its own script. Build-file descriptors are counted
//! separately: one reference from the script's own document plus one per
//! associated document. The store is not thread-safe; callers serialize
//! access.

mod build_file;
mod handle;
mod translate;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use url::Url;
use zigls_analysis::{convert_c_include, DocumentScope, NodeIndex, Tree};
use zigls_core::offsets::{self, OffsetEncoding, Range};
use zigls_core::{uri, uri::UriError, Config};

pub use build_file::{
    BuildAssociatedConfig, BuildError, BuildFile, BuildFileConfig, BuildFileWalker, BuildOption,
    BuildRunner, Package, ZigBuildRunner,
};
pub use handle::{CImportRecord, Handle};
pub use translate::{CTranslator, TranslationResult, ZigTranslator};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] zigls_analysis::ParseError),

    #[error("URI error: {0}")]
    Uri(#[from] UriError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// One client edit: either a ranged replacement or a whole-document
/// replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Full { text: String },
    Incremental { range: Range, text: String },
}

pub struct DocumentStore {
    config: Config,
    std_uri: Option<Url>,
    handles: HashMap<Url, Handle>,
    build_files: Vec<BuildFile>,
    runner: Box<dyn BuildRunner + Send>,
    translator: Box<dyn CTranslator + Send>,
}

impl DocumentStore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_collaborators(
            config,
            Box::new(ZigBuildRunner),
            Box::new(ZigTranslator),
        )
    }

    /// Build a store with explicit collaborators; tests use this to
    /// substitute the build runner and the C translator.
    #[must_use]
    pub fn with_collaborators(
        config: Config,
        runner: Box<dyn BuildRunner + Send>,
        translator: Box<dyn CTranslator + Send>,
    ) -> Self {
        let std_uri = config.zig_lib_path.as_deref().and_then(std_uri_from_lib_path);
        Self {
            config,
            std_uri,
            handles: HashMap::new(),
            build_files: Vec::new(),
            runner,
            translator,
        }
    }

    /// URI of the standard library's root module, if the library path is
    /// configured and resolvable.
    #[must_use]
    pub fn std_uri(&self) -> Option<&Url> {
        self.std_uri.as_ref()
    }

    #[must_use]
    pub fn get_handle(&self, uri: &Url) -> Option<&Handle> {
        self.handles.get(uri)
    }

    /// Live documents, in no particular order.
    pub fn handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.values()
    }

    #[must_use]
    pub fn get_build_file(&self, uri: &Url) -> Option<&BuildFile> {
        self.build_files.iter().find(|build_file| build_file.uri == *uri)
    }

    /// Open a document with the given text, or increment the count of an
    /// already-open one. The text argument is ignored on re-open; the store
    /// keeps its own copy.
    ///
    /// # Errors
    ///
    /// Propagates parse failures and I/O errors from build-file discovery.
    pub fn open_document(&mut self, uri: &Url, text: String) -> Result<&Handle, Error> {
        let mut reopened = false;
        let mut bump_build_refs = false;
        if let Some(handle) = self.handles.get_mut(uri) {
            handle.count += 1;
            reopened = true;
            bump_build_refs = handle.is_build_file;
            tracing::debug!("Document {uri} opened again, count {}", handle.count);
        }
        if reopened {
            if bump_build_refs {
                self.increment_build_file_refs(uri);
            }
            return Ok(self.handles.get(uri).expect("handle exists; just reopened above"));
        }
        self.new_document(uri.clone(), text)
    }

    /// Release one client reference. Unknown URIs are ignored.
    pub fn close_document(&mut self, uri: &Url) {
        tracing::debug!("Closing document {uri}");
        self.decrement_count(uri);
    }

    /// Re-run the build runner after a build script was saved. Failures are
    /// logged; the previous configuration stays in place.
    pub fn apply_save(&mut self, uri: &Url) {
        let Some(handle) = self.handles.get(uri) else {
            return;
        };
        if !handle.is_build_file {
            return;
        }
        let build_file_uri = handle.uri.clone();
        if let Err(err) = self.reload_build_file_config(&build_file_uri) {
            tracing::error!("Failed to reload packages of build file {build_file_uri}: {err}");
        }
    }

    /// Apply a batch of client edits, then refresh the derived state.
    ///
    /// Only the last whole-document replacement matters: it becomes the
    /// starting text, and the edits after it are applied on top. Ranges are
    /// interpreted under `encoding`.
    ///
    /// # Errors
    ///
    /// Propagates parse failures from the refresh; the new text is kept
    /// either way, the previous tree and scope stay installed on failure.
    pub fn apply_changes(
        &mut self,
        uri: &Url,
        changes: &[Change],
        encoding: OffsetEncoding,
    ) -> Result<(), Error> {
        {
            let Some(handle) = self.handles.get_mut(uri) else {
                return Ok(());
            };
            let mut text = handle.text.clone();
            let mut first_incremental = 0;
            for (index, change) in changes.iter().enumerate() {
                if let Change::Full { text: full } = change {
                    text.clone_from(full);
                    first_incremental = index + 1;
                }
            }
            for change in &changes[first_incremental..] {
                if let Change::Incremental { range, text: replacement } = change {
                    let start = offsets::position_to_index(&text, range.start, encoding);
                    let end = offsets::position_to_index(&text, range.end, encoding);
                    text.replace_range(start.min(end)..start.max(end), replacement);
                }
            }
            handle.text = text;
        }
        self.refresh_document(uri)
    }

    /// Map a raw import string in the given document to a URI.
    ///
    /// # Errors
    ///
    /// Returns a URI error when a relative import cannot be resolved against
    /// the document's own URI.
    pub fn uri_from_import_str(
        &self,
        handle_uri: &Url,
        import_str: &str,
    ) -> Result<Option<Url>, Error> {
        let Some(handle) = self.handles.get(handle_uri) else {
            return Ok(None);
        };
        self.uri_for_import(&handle.uri, handle.associated_build_file.as_ref(), import_str)
    }

    /// Resolve an import of `handle_uri` to a live handle, opening the
    /// target from disk on demand and retaining it in `imports_used`.
    ///
    /// # Errors
    ///
    /// Propagates URI resolution errors and failures while opening the
    /// target document.
    pub fn resolve_import(
        &mut self,
        handle_uri: &Url,
        import_str: &str,
    ) -> Result<Option<&Handle>, Error> {
        let (final_uri, already_used, allowed) = {
            let Some(handle) = self.handles.get(handle_uri) else {
                return Ok(None);
            };
            let Some(final_uri) = self.uri_for_import(
                &handle.uri,
                handle.associated_build_file.as_ref(),
                import_str,
            )?
            else {
                return Ok(None);
            };
            let already_used = handle.imports_used.contains(&final_uri);
            // The resolved URI must be something the document can actually
            // see: one of its own imports or a package of its build file.
            let in_imports = handle.import_uris.contains(&final_uri);
            let in_packages = handle
                .associated_build_file
                .as_ref()
                .and_then(|build_uri| self.get_build_file(build_uri))
                .is_some_and(|build_file| {
                    build_file.config.packages.iter().any(|package| package.uri == final_uri)
                });
            (final_uri, already_used, in_imports || in_packages)
        };

        if already_used {
            return Ok(self.handles.get(&final_uri));
        }
        if !allowed {
            return Ok(None);
        }
        self.retain_import(handle_uri, &final_uri)
    }

    /// Resolve the C import at `node` to the handle of its translated
    /// document, opening it on demand.
    ///
    /// # Errors
    ///
    /// Propagates failures while opening the translated document.
    pub fn resolve_c_import(
        &mut self,
        handle_uri: &Url,
        node: NodeIndex,
    ) -> Result<Option<&Handle>, Error> {
        let (target_uri, already_used) = {
            let Some(handle) = self.handles.get(handle_uri) else {
                return Ok(None);
            };
            let Some(record) = handle.c_imports.iter().find(|record| record.node == node) else {
                return Ok(None);
            };
            let Some(target) = record.result.success_uri() else {
                return Ok(None);
            };
            (target.clone(), handle.imports_used.contains(target))
        };

        if already_used {
            return Ok(self.handles.get(&target_uri));
        }
        self.retain_import(handle_uri, &target_uri)
    }

    /// Union of the error tags visible from `handle_uri`: its own plus those
    /// of every import it retains. Deduplicated, insertion order preserved.
    #[must_use]
    pub fn error_completion_items(&self, handle_uri: &Url) -> Vec<String> {
        self.tag_completion_items(handle_uri, error_completions)
    }

    /// Union of the enum members visible from `handle_uri`.
    #[must_use]
    pub fn enum_completion_items(&self, handle_uri: &Url) -> Vec<String> {
        self.tag_completion_items(handle_uri, enum_completions)
    }

    fn tag_completion_items(
        &self,
        handle_uri: &Url,
        select: fn(&DocumentScope) -> &[String],
    ) -> Vec<String> {
        let Some(handle) = self.handles.get(handle_uri) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for label in select(&handle.document_scope) {
            if seen.insert(label.clone()) {
                items.push(label.clone());
            }
        }
        for used in &handle.imports_used {
            // Every entry in imports_used is registered while its holder
            // lives; a miss here is a bookkeeping bug upstream.
            let Some(import_handle) = self.handles.get(used) else {
                debug_assert!(false, "imports_used entry {used} is not registered");
                continue;
            };
            for label in select(&import_handle.document_scope) {
                if seen.insert(label.clone()) {
                    items.push(label.clone());
                }
            }
        }
        items
    }

    // ── Open / refresh / close pipeline ──────────────────────────────────

    /// Create and register a handle for a URI that is not yet tracked.
    fn new_document(&mut self, uri: Url, text: String) -> Result<&Handle, Error> {
        tracing::debug!("Opening document {uri}");
        let tree = zigls_analysis::parse(&text)?;
        let document_scope = DocumentScope::new(&tree);

        let mut handle = Handle {
            count: 1,
            uri: uri.clone(),
            text,
            tree,
            document_scope,
            import_uris: Vec::new(),
            c_imports: Vec::new(),
            imports_used: Vec::new(),
            associated_build_file: None,
            is_build_file: false,
        };

        // TODO: detect the std tree from zig_lib_path instead of matching
        // "/std/" anywhere in the URI.
        let in_std = uri.as_str().contains("/std/");
        if self.config.zig_exe_path.is_some()
            && uri.as_str().ends_with("/build.zig")
            && !in_std
        {
            tracing::debug!("Document is a build file, extracting packages");
            if self.get_build_file(&uri).is_none() {
                let build_file = self.create_build_file(&uri)?;
                self.build_files.push(build_file);
            }
            handle.is_build_file = true;
        } else if self.config.zig_exe_path.is_some() && !in_std {
            self.associate_with_build_file(&mut handle)?;
        }

        handle.import_uris =
            self.collect_import_uris(&handle.uri, handle.associated_build_file.as_ref(), &handle.tree)?;
        handle.c_imports =
            self.collect_c_imports(&handle.tree, handle.associated_build_file.as_ref(), &[]);

        // Insertion must not overwrite an existing entry.
        debug_assert!(!self.handles.contains_key(&uri));
        Ok(self.handles.entry(uri).or_insert(handle))
    }

    /// Walk the ancestor directories of the handle's file, discovering build
    /// scripts and picking the one this document belongs to. The deepest
    /// build file whose packages reach the document wins; when none does,
    /// the deepest one seen is the fallback.
    fn associate_with_build_file(&mut self, handle: &mut Handle) -> Result<(), Error> {
        let path = uri::to_path(&handle.uri)?;
        let mut associated_build_file: Option<Url> = None;
        let mut closest_build_file: Option<Url> = None;
        for build_path in BuildFileWalker::new(&path) {
            tracing::debug!("Found build path: {}", build_path.display());
            let build_file_uri = uri::from_path(&build_path)?;
            if self.get_build_file(&build_file_uri).is_none() {
                let build_file = self.create_build_file(&build_file_uri)?;
                self.build_files.push(build_file);
            }
            if !self.handles.contains_key(&build_file_uri) {
                let build_text = std::fs::read_to_string(&build_path)?;
                self.new_document(build_file_uri.clone(), build_text)?;
            }
            // The walk is root-downward, so the last hit in either bucket is
            // the deepest; among several associated build files the nearest
            // one wins.
            if self.uri_associated_with_build(&build_file_uri, &handle.uri) {
                associated_build_file = Some(build_file_uri);
            } else {
                closest_build_file = Some(build_file_uri);
            }
        }
        if associated_build_file.is_none() {
            if let Some(build_file_uri) = &closest_build_file {
                tracing::debug!(
                    "No build file directly references {}, falling back to {build_file_uri}",
                    handle.uri
                );
            }
        }
        if let Some(build_file_uri) = associated_build_file.or(closest_build_file) {
            self.increment_build_file_refs(&build_file_uri);
            tracing::debug!("Associated build file {build_file_uri} with {}", handle.uri);
            handle.associated_build_file = Some(build_file_uri);
        }
        Ok(())
    }

    /// Rebuild the derived state after the handle's text changed. The new
    /// tree and scope are built first and swapped in atomically; a parse
    /// failure leaves the previous ones installed.
    fn refresh_document(&mut self, uri: &Url) -> Result<(), Error> {
        tracing::debug!("Refreshing document {uri}");
        let (handle_uri, associated_build_file) = match self.handles.get(uri) {
            Some(handle) => (
                handle.uri.clone(),
                handle.associated_build_file.clone(),
            ),
            None => return Ok(()),
        };
        let tree = match self.handles.get(uri) {
            Some(handle) => zigls_analysis::parse(&handle.text)?,
            None => return Ok(()),
        };
        let document_scope = DocumentScope::new(&tree);
        let import_uris =
            self.collect_import_uris(&handle_uri, associated_build_file.as_ref(), &tree)?;

        let previous_c_imports = match self.handles.get_mut(uri) {
            Some(handle) => std::mem::take(&mut handle.c_imports),
            None => return Ok(()),
        };
        let c_imports =
            self.collect_c_imports(&tree, associated_build_file.as_ref(), &previous_c_imports);
        drop(previous_c_imports);

        let removed = {
            let Some(handle) = self.handles.get_mut(uri) else {
                return Ok(());
            };
            handle.tree = tree;
            handle.document_scope = document_scope;
            handle.import_uris = import_uris;
            handle.c_imports = c_imports;

            // Keep imports that are still imported under the new text; each
            // dropped entry releases one count on its target.
            let Handle {
                imports_used,
                import_uris,
                c_imports,
                ..
            } = handle;
            let mut removed = Vec::new();
            imports_used.retain(|used| {
                let keep = import_uris.contains(used)
                    || c_imports
                        .iter()
                        .any(|record| record.result.success_uri() == Some(used));
                if !keep {
                    removed.push(used.clone());
                }
                keep
            });
            removed
        };
        for used in removed {
            self.decrement_count(&used);
        }
        Ok(())
    }

    /// Release one reference on a handle; at zero, tear it down and release
    /// everything it holds. Unknown URIs and already-zero counts are
    /// ignored.
    fn decrement_count(&mut self, uri: &Url) {
        {
            let Some(handle) = self.handles.get_mut(uri) else {
                return;
            };
            if handle.count == 0 {
                return;
            }
            handle.count -= 1;
            if handle.count > 0 {
                return;
            }
        }
        // Remove the entry before cascading so the build-file cycle cannot
        // re-enter this handle.
        let Some(handle) = self.handles.remove(uri) else {
            return;
        };
        tracing::debug!("Freeing document {uri}");
        if let Some(build_file_uri) = &handle.associated_build_file {
            self.decrement_build_file_refs(build_file_uri);
        }
        if handle.is_build_file {
            self.decrement_build_file_refs(uri);
        }
        for used in &handle.imports_used {
            self.decrement_count(used);
        }
        // Text, tree, scope and C-import results drop with the handle.
    }

    fn increment_build_file_refs(&mut self, uri: &Url) {
        if let Some(build_file) = self.build_files.iter_mut().find(|b| b.uri == *uri) {
            build_file.refs += 1;
        }
    }

    /// Release one reference on a build-file descriptor; at zero, drop its
    /// configuration and the reference it holds on its own document.
    fn decrement_build_file_refs(&mut self, uri: &Url) {
        let Some(index) = self.build_files.iter().position(|b| b.uri == *uri) else {
            return;
        };
        if self.build_files[index].refs == 0 {
            return;
        }
        self.build_files[index].refs -= 1;
        if self.build_files[index].refs > 0 {
            return;
        }
        // Remove before cascading, mirroring decrement_count.
        let build_file = self.build_files.swap_remove(index);
        tracing::debug!("Freeing build file {}", build_file.uri);
        self.decrement_count(&build_file.uri);
        // Packages and include dirs drop with the descriptor.
    }

    // ── Build-file discovery ─────────────────────────────────────────────

    /// Build a descriptor for the script at `uri`: read `zls.build.json`,
    /// fall back to the global builtin path, then query the build runner.
    /// Runner failures leave the configuration empty.
    fn create_build_file(&mut self, uri: &Url) -> Result<BuildFile, Error> {
        let build_file_path = uri::to_path(uri)?;
        let mut build_file = BuildFile {
            refs: 1,
            uri: uri.clone(),
            config: BuildFileConfig::default(),
            builtin_uri: None,
            build_options: None,
        };

        if let Some(associated) = build_file::load_build_associated_config(&build_file_path)? {
            if let Some(relative) = associated.relative_builtin_path {
                if let Some(dir) = build_file_path.parent() {
                    build_file.builtin_uri = Some(uri::from_path(&dir.join(relative))?);
                }
            }
            build_file.build_options = associated.build_options;
        }
        if build_file.builtin_uri.is_none() {
            if let Some(builtin_path) = &self.config.builtin_path {
                build_file.builtin_uri = Some(uri::from_path(builtin_path)?);
                tracing::info!("No builtin override for {uri}, falling back to the global builtin");
            }
        }

        let build_options = build_file.build_options.clone().unwrap_or_default();
        match self.run_build_runner(&build_file_path, &build_options) {
            Ok(config) => build_file.config = config,
            Err(err) => {
                tracing::error!("Failed to load packages of build file {uri}: {err}");
            }
        }
        Ok(build_file)
    }

    fn run_build_runner(
        &mut self,
        build_file_path: &Path,
        build_options: &[BuildOption],
    ) -> Result<BuildFileConfig, BuildError> {
        let stdout = self
            .runner
            .run_build_script(&self.config, build_file_path, build_options)?;
        let script_dir = build_file_path.parent().unwrap_or_else(|| Path::new("."));
        BuildFileConfig::from_runner_output(&stdout, script_dir)
    }

    /// Re-run the runner and replace the descriptor's configuration. The new
    /// configuration is built completely before the old one is dropped.
    fn reload_build_file_config(&mut self, uri: &Url) -> Result<(), Error> {
        let build_file_path = uri::to_path(uri)?;
        let build_options = self
            .get_build_file(uri)
            .and_then(|build_file| build_file.build_options.clone())
            .unwrap_or_default();
        let config = self.run_build_runner(&build_file_path, &build_options)?;
        if let Some(build_file) = self.build_files.iter_mut().find(|b| b.uri == *uri) {
            build_file.config = config;
        }
        Ok(())
    }

    /// Whether `uri` is reachable from any package declared by the build
    /// file, via transitive imports. Errors along the way mean "not
    /// associated" for that package.
    fn uri_associated_with_build(&mut self, build_file_uri: &Url, uri: &Url) -> bool {
        let package_uris: Vec<Url> = match self.get_build_file(build_file_uri) {
            Some(build_file) => build_file
                .config
                .packages
                .iter()
                .map(|package| package.uri.clone())
                .collect(),
            None => return false,
        };
        let mut checked = HashSet::new();
        for package_uri in package_uris {
            if package_uri == *uri {
                return true;
            }
            if self.uri_in_imports(&mut checked, &package_uri, uri) {
                return true;
            }
        }
        false
    }

    fn uri_in_imports(
        &mut self,
        checked: &mut HashSet<Url>,
        source_uri: &Url,
        uri: &Url,
    ) -> bool {
        // Consider it checked even if opening it fails below.
        if !checked.insert(source_uri.clone()) {
            return false;
        }
        let import_uris: Vec<Url> = if let Some(handle) = self.handles.get(source_uri) {
            handle.import_uris.clone()
        } else {
            match self.new_document_from_uri(source_uri) {
                Ok(Some(handle)) => handle.import_uris.clone(),
                Ok(None) | Err(_) => return false,
            }
        };
        for import_uri in &import_uris {
            if import_uri == uri {
                return true;
            }
            if self.uri_in_imports(checked, import_uri, uri) {
                return true;
            }
        }
        false
    }

    // ── Import resolution ────────────────────────────────────────────────

    fn uri_for_import(
        &self,
        handle_uri: &Url,
        associated_build_file: Option<&Url>,
        import_str: &str,
    ) -> Result<Option<Url>, Error> {
        if import_str == "std" {
            if self.std_uri.is_none() {
                tracing::error!("Cannot resolve std import, zig_lib_path is not configured");
            }
            return Ok(self.std_uri.clone());
        }
        if import_str == "builtin" {
            if let Some(build_file) =
                associated_build_file.and_then(|build_uri| self.get_build_file(build_uri))
            {
                if let Some(builtin_uri) = &build_file.builtin_uri {
                    return Ok(Some(builtin_uri.clone()));
                }
            }
            if let Some(builtin_path) = &self.config.builtin_path {
                return Ok(Some(uri::from_path(builtin_path)?));
            }
            return Ok(None);
        }
        if !import_str.ends_with(".zig") {
            // Anything else that is not a file path is a package name
            // declared by the associated build file.
            if let Some(build_file) =
                associated_build_file.and_then(|build_uri| self.get_build_file(build_uri))
            {
                for package in &build_file.config.packages {
                    if package.name == import_str {
                        return Ok(Some(package.uri.clone()));
                    }
                }
            }
            return Ok(None);
        }
        Ok(Some(uri::resolve_relative(handle_uri, import_str)?))
    }

    /// Append `target_uri` to the handle's `imports_used`, opening the
    /// target from disk when it is not yet registered. The freshly-opened
    /// document's initial count is the reference the entry holds.
    fn retain_import(
        &mut self,
        handle_uri: &Url,
        target_uri: &Url,
    ) -> Result<Option<&Handle>, Error> {
        if self.handles.contains_key(target_uri) {
            if let Some(target) = self.handles.get_mut(target_uri) {
                target.count += 1;
            }
        } else if self.new_document_from_uri(target_uri)?.is_none() {
            return Ok(None);
        }
        if let Some(handle) = self.handles.get_mut(handle_uri) {
            handle.imports_used.push(target_uri.clone());
        }
        Ok(self.handles.get(target_uri))
    }

    fn collect_import_uris(
        &self,
        handle_uri: &Url,
        associated_build_file: Option<&Url>,
        tree: &Tree,
    ) -> Result<Vec<Url>, Error> {
        let mut uris = Vec::new();
        for import_str in tree.import_strs() {
            if let Some(resolved) =
                self.uri_for_import(handle_uri, associated_build_file, import_str)?
            {
                uris.push(resolved);
            }
        }
        Ok(uris)
    }

    // ── C-import collection ──────────────────────────────────────────────

    /// Build the C-import record set for a tree, reusing translation results
    /// from `previous` records whose source hash matches. The translator is
    /// only invoked for hashes unseen in the previous pass.
    fn collect_c_imports(
        &mut self,
        tree: &Tree,
        associated_build_file: Option<&Url>,
        previous: &[CImportRecord],
    ) -> Vec<CImportRecord> {
        let include_dirs: Vec<PathBuf> = associated_build_file
            .and_then(|build_uri| self.get_build_file(build_uri))
            .map(|build_file| build_file.config.include_dirs.clone())
            .unwrap_or_default();

        let mut records = Vec::new();
        for node in tree.c_import_nodes() {
            let Ok(source) = convert_c_include(tree, node) else {
                continue;
            };
            let hash = c_source_hash(&source);
            if let Some(hit) = previous.iter().find(|record| record.hash == hash) {
                records.push(CImportRecord {
                    node,
                    hash,
                    result: hit.result.clone(),
                });
                continue;
            }
            if let Some(result) = self.translator.translate(&self.config, &include_dirs, &source) {
                records.push(CImportRecord { node, hash, result });
            }
        }
        records
    }

    // ── Auxiliary ────────────────────────────────────────────────────────

    /// Open a document by reading its file from disk. I/O failure is not an
    /// error; the document is simply absent.
    fn new_document_from_uri(&mut self, uri: &Url) -> Result<Option<&Handle>, Error> {
        let path = uri::to_path(uri)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("Cannot open file {}: {err}", path.display());
                return Ok(None);
            }
        };
        self.new_document(uri.clone(), text).map(Some)
    }
}

fn error_completions(scope: &DocumentScope) -> &[String] {
    &scope.error_completions
}

fn enum_completions(scope: &DocumentScope) -> &[String] {
    &scope.enum_completions
}

fn c_source_hash(source: &str) -> [u8; 16] {
    xxhash_rust::xxh3::xxh3_128(source.as_bytes()).to_le_bytes()
}

/// Locate the standard library's root module under the configured library
/// path, trying `std/std.zig` then `zig/std/std.zig`.
fn std_uri_from_lib_path(lib_path: &Path) -> Option<Url> {
    let candidates = [
        lib_path.join("std").join("std.zig"),
        lib_path.join("zig").join("std").join("std.zig"),
    ];
    for candidate in candidates {
        if candidate.is_file() {
            return uri::from_path(&candidate).ok();
        }
    }
    tracing::warn!("Cannot locate the std library under {}", lib_path.display());
    None
}
