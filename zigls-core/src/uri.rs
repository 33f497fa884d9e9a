//! URI to filesystem path conversions.
//!
//! The document store keys everything by [`Url`]; these helpers are the only
//! place where URIs and paths meet.

use std::path::{Path, PathBuf};

use url::Url;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum UriError {
    #[error("path cannot be represented as a file URI: {0}")]
    InvalidPath(PathBuf),

    #[error("URI does not point at the local filesystem: {0}")]
    NotAFilePath(Url),

    #[error("URI cannot serve as a base for relative imports: {0}")]
    BadScheme(Url),
}

/// Convert an absolute filesystem path to a `file://` URI.
///
/// # Errors
///
/// Returns [`UriError::InvalidPath`] for relative paths and paths that are
/// not valid under the `file` scheme.
pub fn from_path(path: &Path) -> Result<Url, UriError> {
    Url::from_file_path(path).map_err(|()| UriError::InvalidPath(path.to_path_buf()))
}

/// Convert a `file://` URI back to a filesystem path.
///
/// # Errors
///
/// Returns [`UriError::NotAFilePath`] for URIs with a non-`file` scheme or a
/// foreign host.
pub fn to_path(uri: &Url) -> Result<PathBuf, UriError> {
    uri.to_file_path()
        .map_err(|()| UriError::NotAFilePath(uri.clone()))
}

/// Resolve a relative import against the URI of the importing document.
///
/// The final path segment of `base` (the file name) is dropped, per RFC 3986
/// reference resolution, so `file:///a/main.zig` + `sub/b.zig` yields
/// `file:///a/sub/b.zig`.
///
/// # Errors
///
/// Returns [`UriError::BadScheme`] when `base` cannot carry relative
/// references.
pub fn resolve_relative(base: &Url, relative: &str) -> Result<Url, UriError> {
    base.join(relative)
        .map_err(|_| UriError::BadScheme(base.clone()))
}
