use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration, decoded from the client's `initializationOptions`.
///
/// Every field defaults to absent. Without `zig_exe_path` the store still
/// tracks documents, but build files are not discovered and package imports
/// do not resolve.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the `zig` executable, used for the build runner and
    /// `translate-c`.
    pub zig_exe_path: Option<PathBuf>,

    /// Path to the directory containing the Zig standard library.
    pub zig_lib_path: Option<PathBuf>,

    /// Path to the build-runner script handed to `zig run`.
    pub build_runner_path: Option<PathBuf>,

    /// Global cache directory passed to the build runner and the translator.
    pub global_cache_path: Option<PathBuf>,

    /// Fallback path to a pre-generated `builtin.zig`, used when a build file
    /// does not declare its own.
    pub builtin_path: Option<PathBuf>,
}
