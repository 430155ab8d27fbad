//! The storage-client seam.
//!
//! The filesystem view needs exactly three primitives from the object
//! store: a head-style metadata lookup, an object download, and a
//! one-level listing grouped by a delimiter. [`ObjectStore`] captures that
//! contract; `objfs-aws` implements it on top of `aws-sdk-s3`.
//!
//! Implementations must be safe for concurrent use. Every call is an
//! independent, stateless request; the adapter performs no caching or
//! retrying on top of them.

use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;

/// An object's contents as a stream of byte chunks.
pub type ObjectBody = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// Raw header values from a head-style lookup, exactly as the store
/// returned them.
///
/// Values stay unparsed on purpose: header parsing belongs to
/// [`ObjectFile::stat`](crate::ObjectFile::stat), so a malformed
/// `Content-Length` surfaces as a typed error instead of a silent default.
#[derive(Debug, Clone, Default)]
pub struct HeadOutput {
    pub content_length: Option<String>,
    pub last_modified: Option<String>,
}

/// One page of a delimiter-grouped listing.
#[derive(Debug, Clone, Default)]
pub struct ListOutput {
    /// Key prefixes one level below the queried prefix.
    pub common_prefixes: Vec<String>,
    /// Object keys directly under the queried prefix.
    pub objects: Vec<String>,
    /// Whether the store had more results than this page carries.
    pub truncated: bool,
}

/// A failure reported by the storage client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key does not exist. Kept distinct so the resolver can fall
    /// back to a directory-marker probe instead of giving up.
    #[error("not found")]
    NotFound,

    /// Anything else: connectivity, authentication, server-side failures.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StoreError {
    pub fn other(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Other(source.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// The three object-store operations the filesystem view consumes.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Looks up an object's metadata without downloading it.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no object exists at `key`.
    async fn head_object(&self, key: &str) -> Result<HeadOutput, StoreError>;

    /// Opens an object's contents for sequential reading.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no object exists at `key`.
    async fn get_object(&self, key: &str) -> Result<ObjectBody, StoreError>;

    /// Lists one page of keys under `prefix`, grouped by `delimiter`.
    ///
    /// The delimiter bounds the listing to one level of depth: keys with
    /// further delimiters collapse into `common_prefixes`.
    ///
    /// # Errors
    /// Any store failure. An empty result is not an error.
    async fn list_objects(&self, prefix: &str, delimiter: &str) -> Result<ListOutput, StoreError>;
}
