// SPDX-License-Identifier: MPL-2.0
//! Image identifiers: where the bytes of a page come from.
//!
//! An identifier starting with `http://` or `https://` is fetched over the
//! network; anything else is a local file path.

use crate::error::{LoadError, LoadErrorKind, Result};
use std::path::{Path, PathBuf};

/// File extensions picked up when a directory is given instead of a list.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

/// Resolved location of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    #[must_use]
    pub fn parse(identifier: &str) -> Self {
        let lower = identifier.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(identifier.to_string())
        } else {
            Source::Local(PathBuf::from(identifier))
        }
    }

    /// Reads the raw bytes behind `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadErrorKind::Io`] for unreadable files and
    /// [`LoadErrorKind::Network`] for failed or non-success HTTP responses.
    pub async fn fetch(&self, identifier: &str) -> std::result::Result<Vec<u8>, LoadError> {
        match self {
            Source::Local(path) => tokio::fs::read(path)
                .await
                .map_err(|e| LoadError::new(identifier, LoadErrorKind::Io, e.to_string())),
            Source::Remote(url) => {
                let network = |e: reqwest::Error| {
                    LoadError::new(identifier, LoadErrorKind::Network, e.to_string())
                };
                let response = reqwest::get(url)
                    .await
                    .map_err(network)?
                    .error_for_status()
                    .map_err(network)?;
                let bytes = response.bytes().await.map_err(network)?;
                Ok(bytes.to_vec())
            }
        }
    }
}

/// Whether the path has one of the [`IMAGE_EXTENSIONS`].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Lists the supported images of a directory, sorted case-insensitively by
/// file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    Ok(files
        .into_iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}

/// Expands CLI arguments into page identifiers.
///
/// A single directory argument expands to its images; otherwise arguments
/// are taken verbatim.
///
/// # Errors
///
/// Returns an error if a directory argument cannot be read.
pub fn expand_arguments(arguments: Vec<String>) -> Result<Vec<String>> {
    if let [single] = arguments.as_slice() {
        let path = Path::new(single);
        if path.is_dir() {
            return scan_directory(path);
        }
    }
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn http_and_https_are_remote() {
        assert!(matches!(Source::parse("https://x.test/a.png"), Source::Remote(_)));
        assert!(matches!(Source::parse("HTTP://x.test/a.png"), Source::Remote(_)));
        assert_eq!(
            Source::parse("/images/0.jpg"),
            Source::Local(PathBuf::from("/images/0.jpg"))
        );
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.PNG")));
        assert!(is_supported_image(Path::new("b.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_directory_filters_and_sorts() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["b.png", "A.jpg", "c.txt", "d.webp"] {
            fs::write(dir.path().join(name), b"").expect("write file");
        }
        fs::create_dir(dir.path().join("nested.png")).expect("create dir");

        let found = scan_directory(dir.path()).expect("scan should succeed");
        let names: Vec<_> = found
            .iter()
            .map(|p| Path::new(p).file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.jpg", "b.png", "d.webp"]);
    }

    #[test]
    fn expand_keeps_explicit_lists() {
        let args = vec!["one.png".to_string(), "two.png".to_string()];
        assert_eq!(expand_arguments(args.clone()).expect("expand"), args);
    }

    #[test]
    fn expand_single_directory_scans_it() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("0.png"), b"").expect("write file");
        let args = vec![dir.path().to_string_lossy().into_owned()];
        let expanded = expand_arguments(args).expect("expand");
        assert_eq!(expanded.len(), 1);
        assert!(expanded[0].ends_with("0.png"));
    }

    #[tokio::test]
    async fn fetch_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.png");
        let id = path.to_string_lossy().into_owned();
        let err = Source::parse(&id).fetch(&id).await.expect_err("should fail");
        assert_eq!(err.kind, LoadErrorKind::Io);
    }
}
