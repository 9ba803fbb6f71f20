//! Load Error Module
//! Error taxonomy shared by the CSV and JSON loaders.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse class of a [`LoadError`], for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    FileNotFound,
    Io,
    Format,
    Parse,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed input in {}: {message}", path.display())]
    Format { path: PathBuf, message: String },
    #[error("Cannot parse {field} at {location} in {}: {value:?}", path.display())]
    Parse {
        path: PathBuf,
        field: &'static str,
        location: String,
        value: String,
    },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::FileNotFound { .. } => LoadErrorKind::FileNotFound,
            LoadError::Io { .. } => LoadErrorKind::Io,
            LoadError::Format { .. } => LoadErrorKind::Format,
            LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }

    /// Map an `open`/`read` failure, keeping "not found" distinguishable.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn format(path: &Path, message: impl Into<String>) -> Self {
        LoadError::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn parse(
        path: &Path,
        field: &'static str,
        location: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        LoadError::Parse {
            path: path.to_path_buf(),
            field,
            location: location.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_kept_apart_from_other_io_errors() {
        let path = Path::new("missing.csv");
        let missing = LoadError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(missing.kind(), LoadErrorKind::FileNotFound);

        let denied = LoadError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.kind(), LoadErrorKind::Io);
    }

    #[test]
    fn parse_error_message_names_the_field() {
        let err = LoadError::parse(Path::new("neos.csv"), "diameter", "line 3", "abc");
        let msg = err.to_string();
        assert!(msg.contains("diameter"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"abc\""));
    }
}
