//! Build-file descriptors and discovery.
//!
//! A build file is a `build.zig` script. Its descriptor carries the package
//! and include-directory layout obtained by running the script through the
//! configured compiler, plus overrides from an optional `zls.build.json`
//! next to the script.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use url::Url;
use zigls_core::{uri, uri::UriError, Config};

/// Local and global cache roots handed to the build runner. The runner never
/// writes through the global one, hence the placeholder.
const LOCAL_CACHE_ROOT: &str = "zig-cache";
const GLOBAL_CACHE_ROOT: &str = "ZLS_DONT_CARE";

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("build runner failed: {0}")]
    RunFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid build configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("URI error: {0}")]
    Uri(#[from] UriError),
}

/// One package declared by a build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub uri: Url,
}

/// Package and include-directory layout of one build script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFileConfig {
    pub packages: Vec<Package>,
    pub include_dirs: Vec<PathBuf>,
}

impl BuildFileConfig {
    /// Parse the build runner's stdout. Package paths are resolved relative
    /// to the script's directory; include directories are stored as-is.
    pub(crate) fn from_runner_output(stdout: &str, script_dir: &Path) -> Result<Self, BuildError> {
        let output: RunnerOutput = serde_json::from_str(stdout)?;
        let mut packages = Vec::with_capacity(output.packages.len());
        for package in output.packages {
            let path = PathBuf::from(&package.path);
            let absolute = if path.is_absolute() {
                path
            } else {
                script_dir.join(path)
            };
            packages.push(Package {
                name: package.name,
                uri: uri::from_path(&absolute)?,
            });
        }
        Ok(Self {
            packages,
            include_dirs: output.include_dirs.into_iter().map(PathBuf::from).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RunnerOutput {
    #[serde(default)]
    packages: Vec<RunnerPackage>,
    #[serde(default)]
    include_dirs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RunnerPackage {
    name: String,
    path: String,
}

/// One `-D` option passed through to the build runner, declared by
/// `zls.build.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl BuildOption {
    #[must_use]
    pub fn format_param(&self) -> String {
        match &self.value {
            Some(value) => format!("-D{}={}", self.name, value),
            None => format!("-D{}", self.name),
        }
    }
}

/// Optional per-build-file configuration stored next to the script.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BuildAssociatedConfig {
    /// Builtin file to use for documents associated with this build file,
    /// relative to the script's directory.
    pub relative_builtin_path: Option<String>,
    /// Options forwarded to the build runner's command line.
    pub build_options: Option<Vec<BuildOption>>,
}

/// Read `zls.build.json` from the build script's directory. An absent file
/// is not an error.
pub(crate) fn load_build_associated_config(
    build_file_path: &Path,
) -> Result<Option<BuildAssociatedConfig>, BuildError> {
    let dir = build_file_path.parent().unwrap_or_else(|| Path::new("."));
    let config_path = dir.join("zls.build.json");
    let contents = match std::fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// In-memory record for one build script, independent of the document
/// representing its text.
#[derive(Debug)]
pub struct BuildFile {
    pub(crate) refs: usize,
    pub(crate) uri: Url,
    pub(crate) config: BuildFileConfig,
    pub(crate) builtin_uri: Option<Url>,
    pub(crate) build_options: Option<Vec<BuildOption>>,
}

impl BuildFile {
    /// Number of holders: one for the script's own document, one per
    /// document associated with this build file.
    #[must_use]
    pub fn refs(&self) -> usize {
        self.refs
    }

    #[must_use]
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    #[must_use]
    pub fn config(&self) -> &BuildFileConfig {
        &self.config
    }

    /// Builtin override for documents associated with this build file.
    #[must_use]
    pub fn builtin_uri(&self) -> Option<&Url> {
        self.builtin_uri.as_ref()
    }

    #[must_use]
    pub fn build_options(&self) -> Option<&[BuildOption]> {
        self.build_options.as_deref()
    }
}

/// Iterator over accessible `build.zig` candidates on the ancestor path of a
/// file, from the filesystem root down to the file's own directory.
pub struct BuildFileWalker {
    dirs: std::vec::IntoIter<PathBuf>,
}

impl BuildFileWalker {
    #[must_use]
    pub fn new(file_path: &Path) -> Self {
        let mut dirs: Vec<PathBuf> = file_path
            .parent()
            .map(|dir| dir.ancestors().map(Path::to_path_buf).collect())
            .unwrap_or_default();
        // ancestors() yields deepest-first; the walk goes root-downward.
        dirs.reverse();
        Self {
            dirs: dirs.into_iter(),
        }
    }
}

impl Iterator for BuildFileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for dir in self.dirs.by_ref() {
            let candidate = dir.join("build.zig");
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}

pub trait BuildRunner {
    /// Run the build script through the configured compiler and return the
    /// runner's standard output.
    ///
    /// # Errors
    ///
    /// [`BuildError::RunFailed`] on nonzero exit or missing configuration,
    /// [`BuildError::Io`] when the process cannot be spawned.
    fn run_build_script(
        &mut self,
        config: &Config,
        build_file_path: &Path,
        build_options: &[BuildOption],
    ) -> Result<String, BuildError>;
}

/// Spawns `zig run` on the shared build-runner script.
///
/// This blocks the caller for as long as the script takes to compile and
/// run. Offloading it to a worker is a known candidate once the dispatch
/// loop grows one.
#[derive(Debug, Default)]
pub struct ZigBuildRunner;

impl BuildRunner for ZigBuildRunner {
    fn run_build_script(
        &mut self,
        config: &Config,
        build_file_path: &Path,
        build_options: &[BuildOption],
    ) -> Result<String, BuildError> {
        let (Some(zig_exe), Some(build_runner), Some(global_cache)) = (
            config.zig_exe_path.as_ref(),
            config.build_runner_path.as_ref(),
            config.global_cache_path.as_ref(),
        ) else {
            return Err(BuildError::RunFailed(
                "compiler paths are not configured".to_string(),
            ));
        };
        let script_dir = build_file_path.parent().unwrap_or_else(|| Path::new("."));

        let mut command = Command::new(zig_exe);
        command
            .arg("run")
            .arg(build_runner)
            .arg("--cache-dir")
            .arg(global_cache)
            .arg("--pkg-begin")
            .arg("@build@")
            .arg(build_file_path)
            .arg("--pkg-end")
            .arg("--")
            .arg(zig_exe)
            .arg(script_dir)
            .arg(LOCAL_CACHE_ROOT)
            .arg(GLOBAL_CACHE_ROOT);
        for option in build_options {
            command.arg(option.format_param());
        }

        let output = command.stdin(Stdio::null()).output()?;
        if !output.status.success() {
            return Err(BuildError::RunFailed(format!(
                "build runner exited with {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
