//! Document store integration tests.
//!
//! These build stores over temporary fixture trees and substitute the build
//! runner and the C translator, so no compiler is ever spawned.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use url::Url;
use zigls_core::offsets::{OffsetEncoding, Position, Range};
use zigls_core::Config;
use zigls_lsp::store::{
    BuildError, BuildOption, BuildRunner, CTranslator, Change, DocumentStore, TranslationResult,
    ZigTranslator,
};

/// Build runner stub returning canned JSON; the output can be swapped
/// mid-test to model an edited build script.
#[derive(Clone)]
struct FakeRunner {
    stdout: Arc<Mutex<String>>,
}

impl FakeRunner {
    fn new(stdout: &str) -> Self {
        Self {
            stdout: Arc::new(Mutex::new(stdout.to_string())),
        }
    }

    fn set_stdout(&self, stdout: &str) {
        *self.stdout.lock().unwrap() = stdout.to_string();
    }
}

impl BuildRunner for FakeRunner {
    fn run_build_script(
        &mut self,
        _config: &Config,
        _build_file_path: &Path,
        _build_options: &[BuildOption],
    ) -> Result<String, BuildError> {
        Ok(self.stdout.lock().unwrap().clone())
    }
}

struct FailingRunner;

impl BuildRunner for FailingRunner {
    fn run_build_script(
        &mut self,
        _config: &Config,
        _build_file_path: &Path,
        _build_options: &[BuildOption],
    ) -> Result<String, BuildError> {
        Err(BuildError::RunFailed("exit status 1".to_string()))
    }
}

/// Translator stub that counts invocations and always succeeds with a fixed
/// URI.
#[derive(Clone)]
struct CountingTranslator {
    calls: Arc<AtomicUsize>,
    result_uri: Url,
}

impl CountingTranslator {
    fn new(result_uri: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            result_uri: Url::parse(result_uri).unwrap(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CTranslator for CountingTranslator {
    fn translate(
        &mut self,
        _config: &Config,
        _include_dirs: &[PathBuf],
        _source: &str,
    ) -> Option<TranslationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(TranslationResult::Success(self.result_uri.clone()))
    }
}

fn file_uri(path: &Path) -> Url {
    Url::from_file_path(path).unwrap()
}

fn store_with_runner(config: Config, runner: impl BuildRunner + Send + 'static) -> DocumentStore {
    DocumentStore::with_collaborators(config, Box::new(runner), Box::new(ZigTranslator))
}

// ── Open / close ─────────────────────────────────────────────────────────

#[test]
fn test_single_open_close() {
    let mut store = DocumentStore::new(Config::default());
    let uri = Url::parse("file:///a.zig").unwrap();

    let handle = store.open_document(&uri, "const x = 1;\n".to_string()).unwrap();
    assert_eq!(handle.count(), 1);
    assert_eq!(handle.uri(), &uri);

    store.close_document(&uri);
    assert!(store.get_handle(&uri).is_none());
    assert_eq!(store.handles().count(), 0);
}

#[test]
fn test_reopen_increments_count_and_keeps_text() {
    let mut store = DocumentStore::new(Config::default());
    let uri = Url::parse("file:///a.zig").unwrap();

    store.open_document(&uri, "const x = 1;\n".to_string()).unwrap();
    let handle = store
        .open_document(&uri, "entirely different text".to_string())
        .unwrap();
    assert_eq!(handle.count(), 2);
    assert_eq!(handle.text(), "const x = 1;\n");

    store.close_document(&uri);
    let handle = store.get_handle(&uri).unwrap();
    assert_eq!(handle.count(), 1);
}

#[test]
fn test_close_of_unknown_uri_is_ignored() {
    let mut store = DocumentStore::new(Config::default());
    store.close_document(&Url::parse("file:///nope.zig").unwrap());
    assert_eq!(store.handles().count(), 0);
}

// ── Import resolution ────────────────────────────────────────────────────

#[test]
fn test_import_chain_through_std() {
    let dir = tempfile::tempdir().unwrap();
    let std_dir = dir.path().join("std");
    std::fs::create_dir_all(&std_dir).unwrap();
    std::fs::write(std_dir.join("std.zig"), "pub const mem = struct {};\n").unwrap();

    let config = Config {
        zig_lib_path: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let mut store = DocumentStore::new(config);
    let std_uri = store.std_uri().unwrap().clone();

    let main_uri = Url::parse("file:///root/main.zig").unwrap();
    store
        .open_document(
            &main_uri,
            "const std = @import(\"std\"); _ = std;".to_string(),
        )
        .unwrap();
    assert_eq!(store.get_handle(&main_uri).unwrap().import_uris(), [std_uri.clone()]);

    let std_handle = store.resolve_import(&main_uri, "std").unwrap().unwrap();
    assert_eq!(std_handle.uri(), &std_uri);
    assert_eq!(std_handle.count(), 1);
    assert_eq!(
        store.get_handle(&main_uri).unwrap().imports_used(),
        [std_uri.clone()]
    );

    // Resolving again reuses the retained import without another count.
    store.resolve_import(&main_uri, "std").unwrap().unwrap();
    assert_eq!(store.get_handle(&std_uri).unwrap().count(), 1);

    store.close_document(&main_uri);
    assert!(store.get_handle(&main_uri).is_none());
    assert!(store.get_handle(&std_uri).is_none());
    assert_eq!(store.handles().count(), 0);
}

#[test]
fn test_relative_import_opens_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.zig"), "const E = error{FromB};\n").unwrap();

    let a_uri = file_uri(&dir.path().join("a.zig"));
    let b_uri = file_uri(&dir.path().join("b.zig"));

    let mut store = DocumentStore::new(Config::default());
    store
        .open_document(&a_uri, "const b = @import(\"./b.zig\");\n".to_string())
        .unwrap();

    let b_handle = store.resolve_import(&a_uri, "./b.zig").unwrap().unwrap();
    assert_eq!(b_handle.uri(), &b_uri);
    assert_eq!(b_handle.count(), 1);
}

#[test]
fn test_unlisted_import_does_not_resolve() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.zig"), "").unwrap();

    let a_uri = file_uri(&dir.path().join("a.zig"));
    let mut store = DocumentStore::new(Config::default());
    store.open_document(&a_uri, "const x = 1;\n".to_string()).unwrap();

    // b.zig exists on disk but the document never imports it.
    assert!(store.resolve_import(&a_uri, "./b.zig").unwrap().is_none());
    assert!(store.get_handle(&a_uri).unwrap().imports_used().is_empty());
}

#[test]
fn test_vanished_import_is_released() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.zig"), "").unwrap();

    let a_uri = file_uri(&dir.path().join("a.zig"));
    let b_uri = file_uri(&dir.path().join("b.zig"));

    let mut store = DocumentStore::new(Config::default());
    store
        .open_document(&a_uri, "const b = @import(\"./b.zig\");\n".to_string())
        .unwrap();
    store.resolve_import(&a_uri, "./b.zig").unwrap().unwrap();
    assert_eq!(store.get_handle(&b_uri).unwrap().count(), 1);

    store
        .apply_changes(
            &a_uri,
            &[Change::Full {
                text: "const x = 1;\n".to_string(),
            }],
            OffsetEncoding::Utf16,
        )
        .unwrap();

    assert!(store.get_handle(&a_uri).unwrap().imports_used().is_empty());
    assert!(store.get_handle(&b_uri).is_none());
}

#[test]
fn test_refresh_keeps_still_used_imports() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.zig"), "").unwrap();

    let a_uri = file_uri(&dir.path().join("a.zig"));
    let b_uri = file_uri(&dir.path().join("b.zig"));

    let mut store = DocumentStore::new(Config::default());
    store
        .open_document(&a_uri, "const b = @import(\"./b.zig\");\n".to_string())
        .unwrap();
    store.resolve_import(&a_uri, "./b.zig").unwrap().unwrap();

    // Edit keeps the import, adds unrelated code.
    store
        .apply_changes(
            &a_uri,
            &[Change::Full {
                text: "const b = @import(\"./b.zig\");\nconst x = 2;\n".to_string(),
            }],
            OffsetEncoding::Utf16,
        )
        .unwrap();

    assert_eq!(store.get_handle(&a_uri).unwrap().imports_used(), [b_uri.clone()]);
    assert_eq!(store.get_handle(&b_uri).unwrap().count(), 1);
}

// ── Build files ──────────────────────────────────────────────────────────

#[test]
fn test_build_file_walk_and_association() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("build.zig"), "const std = @import(\"std\");\n").unwrap();
    std::fs::write(src.join("a.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    let runner = FakeRunner::new(
        r#"{ "packages": [ { "name": "mypkg", "path": "src/a.zig" } ], "include_dirs": [] }"#,
    );
    let mut store = store_with_runner(config, runner);

    let a_uri = file_uri(&src.join("a.zig"));
    let build_uri = file_uri(&dir.path().join("build.zig"));
    store
        .open_document(&a_uri, "const std = @import(\"std\");\n".to_string())
        .unwrap();

    let a_handle = store.get_handle(&a_uri).unwrap();
    assert_eq!(a_handle.count(), 1);
    assert_eq!(a_handle.associated_build_file(), Some(&build_uri));

    let build_handle = store.get_handle(&build_uri).unwrap();
    assert!(build_handle.is_build_file());
    assert_eq!(build_handle.count(), 1);

    let build_file = store.get_build_file(&build_uri).unwrap();
    assert_eq!(build_file.refs(), 2);
    assert_eq!(build_file.config().packages[0].name, "mypkg");
    assert_eq!(build_file.config().packages[0].uri, a_uri);

    // Closing the associated document releases its reference; the build
    // file and its own document stay cached for the session.
    store.close_document(&a_uri);
    assert!(store.get_handle(&a_uri).is_none());
    assert_eq!(store.get_build_file(&build_uri).unwrap().refs(), 1);
    assert!(store.get_handle(&build_uri).is_some());
}

#[test]
fn test_nested_associated_build_files_prefer_deepest() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    let src = sub.join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();
    std::fs::write(sub.join("build.zig"), "").unwrap();
    std::fs::write(src.join("a.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    // Both build scripts declare the document as a package (absolute path,
    // so the declaration is identical for either script directory).
    let runner = FakeRunner::new(&format!(
        r#"{{ "packages": [ {{ "name": "mypkg", "path": "{}" }} ], "include_dirs": [] }}"#,
        src.join("a.zig").display()
    ));
    let mut store = store_with_runner(config, runner);

    let a_uri = file_uri(&src.join("a.zig"));
    store.open_document(&a_uri, String::new()).unwrap();

    let root_build_uri = file_uri(&dir.path().join("build.zig"));
    let sub_build_uri = file_uri(&sub.join("build.zig"));
    assert_eq!(
        store.get_handle(&a_uri).unwrap().associated_build_file(),
        Some(&sub_build_uri)
    );
    assert_eq!(store.get_build_file(&sub_build_uri).unwrap().refs(), 2);
    assert_eq!(store.get_build_file(&root_build_uri).unwrap().refs(), 1);
}

#[test]
fn test_fallback_associates_deepest_build_file() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    let deep = sub.join("deep");
    std::fs::create_dir_all(&deep).unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();
    std::fs::write(sub.join("build.zig"), "").unwrap();
    std::fs::write(deep.join("c.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    let runner = FakeRunner::new(r#"{ "packages": [], "include_dirs": [] }"#);
    let mut store = store_with_runner(config, runner);

    let c_uri = file_uri(&deep.join("c.zig"));
    store.open_document(&c_uri, String::new()).unwrap();

    // Neither build file references c.zig; the deepest ancestor wins.
    let sub_build_uri = file_uri(&sub.join("build.zig"));
    assert_eq!(
        store.get_handle(&c_uri).unwrap().associated_build_file(),
        Some(&sub_build_uri)
    );
    assert_eq!(store.get_build_file(&sub_build_uri).unwrap().refs(), 2);
}

#[test]
fn test_runner_failure_leaves_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    let mut store = store_with_runner(config, FailingRunner);

    let a_uri = file_uri(&src.join("a.zig"));
    store.open_document(&a_uri, String::new()).unwrap();

    let build_uri = file_uri(&dir.path().join("build.zig"));
    let build_file = store.get_build_file(&build_uri).unwrap();
    assert!(build_file.config().packages.is_empty());
    assert!(build_file.config().include_dirs.is_empty());
    // The fallback association still happens.
    assert_eq!(
        store.get_handle(&a_uri).unwrap().associated_build_file(),
        Some(&build_uri)
    );
}

#[test]
fn test_save_reloads_build_configuration() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();
    std::fs::write(dir.path().join("newpkg.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    let runner = FakeRunner::new(r#"{ "packages": [], "include_dirs": [] }"#);
    let mut store = store_with_runner(config, runner.clone());

    let build_uri = file_uri(&dir.path().join("build.zig"));
    store.open_document(&build_uri, String::new()).unwrap();
    assert!(store
        .get_build_file(&build_uri)
        .unwrap()
        .config()
        .packages
        .is_empty());

    runner.set_stdout(
        r#"{ "packages": [ { "name": "newpkg", "path": "newpkg.zig" } ], "include_dirs": ["/usr/include"] }"#,
    );
    store.apply_save(&build_uri);

    let build_file = store.get_build_file(&build_uri).unwrap();
    assert_eq!(build_file.config().packages[0].name, "newpkg");
    assert_eq!(
        build_file.config().include_dirs,
        [PathBuf::from("/usr/include")]
    );
}

#[test]
fn test_package_import_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();
    std::fs::write(src.join("dep.zig"), "const E = error{FromDep};\n").unwrap();
    std::fs::write(src.join("main.zig"), "").unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        ..Config::default()
    };
    let runner = FakeRunner::new(
        r#"{ "packages": [
            { "name": "mypkg", "path": "src/dep.zig" },
            { "name": "self", "path": "src/main.zig" }
        ], "include_dirs": [] }"#,
    );
    let mut store = store_with_runner(config, runner);

    let main_uri = file_uri(&src.join("main.zig"));
    let dep_uri = file_uri(&src.join("dep.zig"));
    store
        .open_document(&main_uri, "const dep = @import(\"mypkg\");\n".to_string())
        .unwrap();

    assert_eq!(
        store.uri_from_import_str(&main_uri, "mypkg").unwrap(),
        Some(dep_uri.clone())
    );
    assert_eq!(store.uri_from_import_str(&main_uri, "nope").unwrap(), None);
    assert_eq!(store.uri_from_import_str(&main_uri, "std").unwrap(), None);

    let dep_handle = store.resolve_import(&main_uri, "mypkg").unwrap().unwrap();
    assert_eq!(dep_handle.uri(), &dep_uri);
}

#[test]
fn test_builtin_resolution_prefers_build_file_override() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("build.zig"), "").unwrap();
    std::fs::write(
        dir.path().join("zls.build.json"),
        r#"{ "relative_builtin_path": "mybuiltin.zig" }"#,
    )
    .unwrap();

    let config = Config {
        zig_exe_path: Some(PathBuf::from("zig")),
        builtin_path: Some(PathBuf::from("/global/builtin.zig")),
        ..Config::default()
    };
    let runner = FakeRunner::new(r#"{ "packages": [], "include_dirs": [] }"#);
    let mut store = store_with_runner(config, runner);

    let a_uri = file_uri(&src.join("a.zig"));
    store.open_document(&a_uri, String::new()).unwrap();

    // Associated via fallback; builtin comes from zls.build.json.
    assert_eq!(
        store.uri_from_import_str(&a_uri, "builtin").unwrap(),
        Some(file_uri(&dir.path().join("mybuiltin.zig")))
    );
}

#[test]
fn test_builtin_falls_back_to_global_path() {
    let mut store = DocumentStore::new(Config {
        builtin_path: Some(PathBuf::from("/global/builtin.zig")),
        ..Config::default()
    });
    let uri = Url::parse("file:///a.zig").unwrap();
    store.open_document(&uri, String::new()).unwrap();
    assert_eq!(
        store.uri_from_import_str(&uri, "builtin").unwrap(),
        Some(Url::parse("file:///global/builtin.zig").unwrap())
    );
}

// ── C imports ────────────────────────────────────────────────────────────

#[test]
fn test_c_import_translated_once_and_cached_across_refresh() {
    let translator = CountingTranslator::new("file:///cache/translations/cimport_1.zig");
    let mut store = DocumentStore::with_collaborators(
        Config::default(),
        Box::new(FailingRunner),
        Box::new(translator.clone()),
    );

    let uri = Url::parse("file:///a.zig").unwrap();
    let text = "const c = @cImport(@cInclude(\"stdio.h\"));\n";
    store.open_document(&uri, text.to_string()).unwrap();
    assert_eq!(translator.calls(), 1);

    let first = store.get_handle(&uri).unwrap().c_imports()[0].clone();
    assert_eq!(
        first.result,
        TranslationResult::Success(Url::parse("file:///cache/translations/cimport_1.zig").unwrap())
    );

    // Unrelated whitespace edit: the extracted C source is unchanged, so the
    // translator must not run again.
    store
        .apply_changes(
            &uri,
            &[Change::Full {
                text: format!("{text}\n// trailing comment\n"),
            }],
            OffsetEncoding::Utf16,
        )
        .unwrap();
    assert_eq!(translator.calls(), 1);

    let refreshed = &store.get_handle(&uri).unwrap().c_imports()[0];
    assert_eq!(refreshed.hash, first.hash);
    assert_eq!(refreshed.result, first.result);

    // Changing the embedded C source re-invokes the translator.
    store
        .apply_changes(
            &uri,
            &[Change::Full {
                text: "const c = @cImport(@cInclude(\"stdlib.h\"));\n".to_string(),
            }],
            OffsetEncoding::Utf16,
        )
        .unwrap();
    assert_eq!(translator.calls(), 2);
}

#[test]
fn test_resolve_c_import_opens_translated_document() {
    let dir = tempfile::tempdir().unwrap();
    let translated = dir.path().join("cimport_1.zig");
    std::fs::write(&translated, "pub const FILE = opaque {};\n").unwrap();

    let translated_uri = file_uri(&translated);
    let translator = CountingTranslator::new(translated_uri.as_str());
    let mut store = DocumentStore::with_collaborators(
        Config::default(),
        Box::new(FailingRunner),
        Box::new(translator),
    );

    let uri = Url::parse("file:///a.zig").unwrap();
    store
        .open_document(&uri, "const c = @cImport(@cInclude(\"stdio.h\"));\n".to_string())
        .unwrap();

    let node = store.get_handle(&uri).unwrap().c_imports()[0].node;
    let translated_handle = store.resolve_c_import(&uri, node).unwrap().unwrap();
    assert_eq!(translated_handle.uri(), &translated_uri);
    assert_eq!(translated_handle.count(), 1);
    assert_eq!(
        store.get_handle(&uri).unwrap().imports_used(),
        [translated_uri.clone()]
    );

    // Closing the importer releases the translated document too.
    store.close_document(&uri);
    assert!(store.get_handle(&translated_uri).is_none());
}

// ── applyChanges ─────────────────────────────────────────────────────────

#[test]
fn test_empty_change_list_is_idempotent() {
    let mut store = DocumentStore::new(Config::default());
    let uri = Url::parse("file:///a.zig").unwrap();
    let text = "const E = error{A};\n";
    store.open_document(&uri, text.to_string()).unwrap();

    store.apply_changes(&uri, &[], OffsetEncoding::Utf16).unwrap();
    assert_eq!(store.get_handle(&uri).unwrap().text(), text);
    assert_eq!(store.error_completion_items(&uri), ["A"]);
}

#[test]
fn test_last_full_replacement_wins() {
    let mut store = DocumentStore::new(Config::default());
    let uri = Url::parse("file:///a.zig").unwrap();
    store.open_document(&uri, "original".to_string()).unwrap();

    let changes = [
        Change::Incremental {
            range: Range {
                start: Position { line: 0, character: 0 },
                end: Position { line: 0, character: 8 },
            },
            text: "ignored".to_string(),
        },
        Change::Full {
            text: "const a = 1;".to_string(),
        },
        Change::Full {
            text: "const xy = 1;".to_string(),
        },
        Change::Incremental {
            range: Range {
                start: Position { line: 0, character: 6 },
                end: Position { line: 0, character: 8 },
            },
            text: "z".to_string(),
        },
    ];
    store.apply_changes(&uri, &changes, OffsetEncoding::Utf16).unwrap();
    assert_eq!(store.get_handle(&uri).unwrap().text(), "const z = 1;");
}

#[test]
fn test_incremental_change_respects_utf16_units() {
    let mut store = DocumentStore::new(Config::default());
    let uri = Url::parse("file:///a.zig").unwrap();
    // The crab is one UTF-16 surrogate pair (2 units), 4 bytes in UTF-8.
    store.open_document(&uri, "// 🦀 crab\n".to_string()).unwrap();

    let changes = [Change::Incremental {
        range: Range {
            start: Position { line: 0, character: 3 },
            end: Position { line: 0, character: 5 },
        },
        text: "snake".to_string(),
    }];
    store.apply_changes(&uri, &changes, OffsetEncoding::Utf16).unwrap();
    assert_eq!(store.get_handle(&uri).unwrap().text(), "// snake crab\n");
}

// ── Completion aggregation ───────────────────────────────────────────────

#[test]
fn test_tag_completions_union_across_imports() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("b.zig"),
        "const E = error{FromB, Shared};\nconst M = enum { beta };\n",
    )
    .unwrap();

    let a_uri = file_uri(&dir.path().join("a.zig"));
    let mut store = DocumentStore::new(Config::default());
    store
        .open_document(
            &a_uri,
            "const b = @import(\"./b.zig\");\nconst E = error{Shared, FromA};\nconst M = enum { alpha };\n"
                .to_string(),
        )
        .unwrap();
    store.resolve_import(&a_uri, "./b.zig").unwrap().unwrap();

    assert_eq!(
        store.error_completion_items(&a_uri),
        ["Shared", "FromA", "FromB"]
    );
    assert_eq!(store.enum_completion_items(&a_uri), ["alpha", "beta"]);
}
