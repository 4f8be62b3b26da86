// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Load(LoadError),
}

/// Category of a failed image batch.
/// Used to pick the technical detail shown by the error boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Local file could not be read
    Io,

    /// Remote fetch failed or returned a non-success status
    Network,

    /// Bytes were fetched but are not a decodable image
    Decode,

    /// Requested range does not fit the identifier list
    OutOfRange,
}

/// Aggregated failure of one loader batch.
///
/// A batch either resolves completely or rejects with the first identifier
/// that failed; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub identifier: String,
    pub kind: LoadErrorKind,
    pub reason: String,
}

impl LoadError {
    pub fn new(identifier: impl Into<String>, kind: LoadErrorKind, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Human-readable message shown by the error boundary.
    pub fn user_message(&self) -> &'static str {
        "Failed to load images."
    }

    /// Short technical detail for the fallback's details section.
    pub fn details(&self) -> String {
        format!("{}: {}", self.identifier, self.reason)
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::Io => write!(f, "I/O"),
            LoadErrorKind::Network => write!(f, "network"),
            LoadErrorKind::Decode => write!(f, "decode"),
            LoadErrorKind::OutOfRange => write!(f, "range"),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} error on {}: {})",
            self.user_message(),
            self.kind,
            self.identifier,
            self.reason
        )
    }
}

impl std::error::Error for LoadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Load(e) => write!(f, "Load Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
