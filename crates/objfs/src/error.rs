use crate::store::StoreError;
use crate::timestamp::ParseTimestampError;

use std::num::ParseIntError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the filesystem view.
///
/// "Does not exist" is an expected outcome and carries its own variant;
/// callers can branch on it without inspecting error text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path violates the path rules. The store was never contacted.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// Neither an object nor a directory marker exists at the path.
    #[error("no such object or directory: {0:?}")]
    NotExist(String),

    /// The operation is not supported by this kind of handle.
    #[error("operation {op:?} is not supported on {path:?}")]
    InvalidOperation { op: &'static str, path: String },

    /// A store response header could not be parsed.
    #[error("metadata of {path:?}: {source}")]
    MetadataParse {
        path: String,
        #[source]
        source: MetadataParseError,
    },

    /// The store returned a truncated listing page. Surfaced instead of
    /// auto-paging so large directories are never silently under-reported.
    #[error("directory listing of {0:?} is truncated")]
    Truncated(String),

    /// Any other failure surfaced by the storage client, wrapped with the
    /// operation name and key for diagnosis.
    #[error("store error during {op} on {key:?}: {source}")]
    Store {
        op: &'static str,
        key: String,
        #[source]
        source: StoreError,
    },
}

impl Error {
    pub(crate) fn store(op: &'static str, key: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            op,
            key: key.into(),
            source,
        }
    }

    /// Whether this error means the path simply does not exist.
    #[must_use]
    pub fn is_not_exist(&self) -> bool {
        matches!(self, Self::NotExist(_))
    }
}

/// A store response header the adapter could not make sense of.
#[derive(Debug, thiserror::Error)]
pub enum MetadataParseError {
    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length {value:?}: {source}")]
    InvalidContentLength {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("missing Last-Modified header")]
    MissingLastModified,

    #[error("invalid Last-Modified {value:?}: {source}")]
    InvalidLastModified {
        value: String,
        #[source]
        source: ParseTimestampError,
    },
}
