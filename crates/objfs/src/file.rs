//! File and metadata handles.

use crate::error::{Error, MetadataParseError, Result};
use crate::path::DELIMITER;
use crate::store::{HeadOutput, ObjectBody, ObjectStore, StoreError};
use crate::timestamp::Timestamp;

use std::sync::Arc;

use bytes::Bytes;
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

/// Filesystem-style metadata synthesized from store response headers.
///
/// Synthesized fresh on every [`ObjectFile::stat`] call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    size: u64,
    is_dir: bool,
    modified: Option<Timestamp>,
}

impl Metadata {
    /// The resolved path, without any trailing delimiter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object size in bytes. Zero for directories, whose size carries no
    /// meaning in a key-based store.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Last modification time. `None` for directories.
    #[must_use]
    pub fn modified(&self) -> Option<Timestamp> {
        self.modified
    }
}

/// An open handle to a resolved path.
///
/// File handles own an object byte stream with single-reader semantics;
/// directory handles carry no stream. Each [`ObjectFs::open`] call
/// produces an independent handle.
///
/// [`ObjectFs::open`]: crate::ObjectFs::open
pub struct ObjectFile<S> {
    store: Arc<S>,
    key: String,
    is_dir: bool,
    reader: Option<StreamReader<ObjectBody, Bytes>>,
}

impl<S> std::fmt::Debug for ObjectFile<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectFile")
            .field("key", &self.key)
            .field("is_dir", &self.is_dir)
            .finish_non_exhaustive()
    }
}

impl<S: ObjectStore> ObjectFile<S> {
    pub(crate) fn file(store: Arc<S>, key: String, body: ObjectBody) -> Self {
        Self {
            store,
            key,
            is_dir: false,
            reader: Some(StreamReader::new(body)),
        }
    }

    pub(crate) fn directory(store: Arc<S>, key: String) -> Self {
        Self {
            store,
            key,
            is_dir: true,
            reader: None,
        }
    }

    /// The resolved key this handle is bound to. Directory keys keep their
    /// trailing delimiter.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Synthesizes metadata from the store's response headers.
    ///
    /// Directory handles answer locally: the directory bit, zero size, no
    /// modification time. File handles issue a fresh head lookup per call.
    ///
    /// # Errors
    /// [`Error::MetadataParse`] if a header cannot be parsed;
    /// [`Error::NotExist`] if the object vanished since it was opened;
    /// [`Error::Store`] for any other store failure.
    pub async fn stat(&self) -> Result<Metadata> {
        let name = self.key.strip_suffix(DELIMITER).unwrap_or(&self.key).to_owned();

        if self.is_dir {
            return Ok(Metadata {
                name,
                size: 0,
                is_dir: true,
                modified: None,
            });
        }

        let head = self.store.head_object(&self.key).await.map_err(|source| match source {
            StoreError::NotFound => Error::NotExist(self.key.clone()),
            source => Error::store("HeadObject", &*self.key, source),
        })?;

        let (size, modified) = self.parse_headers(head)?;
        Ok(Metadata {
            name,
            size,
            is_dir: false,
            modified: Some(modified),
        })
    }

    fn parse_headers(&self, head: HeadOutput) -> Result<(u64, Timestamp)> {
        let parse_err = |source: MetadataParseError| Error::MetadataParse {
            path: self.key.clone(),
            source,
        };

        let value = head
            .content_length
            .ok_or_else(|| parse_err(MetadataParseError::MissingContentLength))?;
        let size: u64 = value
            .trim()
            .parse()
            .map_err(|source| parse_err(MetadataParseError::InvalidContentLength { value, source }))?;

        let value = head
            .last_modified
            .ok_or_else(|| parse_err(MetadataParseError::MissingLastModified))?;
        let modified = Timestamp::parse_http_date(&value)
            .map_err(|source| parse_err(MetadataParseError::InvalidLastModified { value, source }))?;

        Ok((size, modified))
    }

    /// Reads up to `buf.len()` bytes from the object stream, returning the
    /// number of bytes read. Zero means end of stream.
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] on a directory handle or after
    /// [`close`](Self::close); [`Error::Store`] if the stream fails.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(Error::InvalidOperation {
                op: "read",
                path: self.key.clone(),
            });
        };
        reader
            .read(buf)
            .await
            .map_err(|source| Error::store("GetObject", &*self.key, StoreError::other(source)))
    }

    /// Releases the object stream. Closing an already-closed handle (or a
    /// directory handle) is a no-op.
    ///
    /// # Errors
    /// Currently infallible; the `Result` keeps room for streams whose
    /// teardown can fail.
    pub fn close(&mut self) -> Result<()> {
        self.reader = None;
        Ok(())
    }
}
