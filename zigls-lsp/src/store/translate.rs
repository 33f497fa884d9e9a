//! C translation seam.
//!
//! The store extracts C source from `@cImport` bodies and hands it to a
//! [`CTranslator`]. The production implementation shells out to
//! `zig translate-c`; tests substitute their own.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use url::Url;
use xxhash_rust::xxh3::xxh3_64;
use zigls_core::{uri, Config};

/// Outcome of handing a generated C snippet to the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// URI of the synthetic Zig document produced by the translator.
    Success(Url),
    /// The translator ran but rejected the source.
    Failure,
}

impl TranslationResult {
    #[must_use]
    pub fn success_uri(&self) -> Option<&Url> {
        match self {
            Self::Success(uri) => Some(uri),
            Self::Failure => None,
        }
    }
}

pub trait CTranslator {
    /// Translate embedded C source to Zig.
    ///
    /// `None` means the translator could not be invoked at all (missing
    /// configuration, spawn failure); the C import is then dropped from the
    /// current record set.
    fn translate(
        &mut self,
        config: &Config,
        include_dirs: &[PathBuf],
        source: &str,
    ) -> Option<TranslationResult>;
}

/// Shells out to `zig translate-c`, caching outputs under the global cache
/// directory keyed by source content.
#[derive(Debug, Default)]
pub struct ZigTranslator;

impl ZigTranslator {
    fn output_dir(config: &Config) -> PathBuf {
        config
            .global_cache_path
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join("translations")
    }
}

impl CTranslator for ZigTranslator {
    fn translate(
        &mut self,
        config: &Config,
        include_dirs: &[PathBuf],
        source: &str,
    ) -> Option<TranslationResult> {
        let zig_exe = config.zig_exe_path.as_ref()?;

        let dir = Self::output_dir(config);
        if let Err(err) = std::fs::create_dir_all(&dir) {
            tracing::warn!("Cannot create translation dir {}: {err}", dir.display());
            return None;
        }
        let stem = format!("cimport_{:016x}", xxh3_64(source.as_bytes()));
        let header_path = dir.join(format!("{stem}.h"));
        if let Err(err) = std::fs::write(&header_path, source) {
            tracing::warn!("Cannot write {}: {err}", header_path.display());
            return None;
        }

        let mut command = Command::new(zig_exe);
        command.arg("translate-c");
        for include_dir in include_dirs {
            command.arg(format!("-I{}", include_dir.display()));
        }
        command.arg(&header_path).stdin(Stdio::null());

        let output = match command.output() {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!("Failed to run zig translate-c: {err}");
                return None;
            }
        };
        if !output.status.success() {
            tracing::debug!("translate-c rejected the source: {}", output.status);
            return Some(TranslationResult::Failure);
        }

        let translated_path = dir.join(format!("{stem}.zig"));
        if let Err(err) = std::fs::write(&translated_path, &output.stdout) {
            tracing::warn!("Cannot write {}: {err}", translated_path.display());
            return None;
        }
        let translated_uri = uri::from_path(&translated_path).ok()?;
        Some(TranslationResult::Success(translated_uri))
    }
}
