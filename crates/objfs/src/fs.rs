//! The filesystem-facing facade.

use crate::dir::DirEntry;
use crate::error::{Error, Result};
use crate::file::ObjectFile;
use crate::resolve::{self, ResolvedKind};
use crate::store::{ObjectStore, StoreError};

use std::sync::Arc;

use tracing::debug;

/// A read-only, path-addressable view over a flat object-storage bucket.
///
/// Directory semantics are emulated from key prefixes and the `/`
/// delimiter; the store itself has no directories. The view is cheap to
/// share: it holds only the storage client, which must be safe for
/// concurrent use.
pub struct ObjectFs<S> {
    store: Arc<S>,
}

impl<S> Clone for ObjectFs<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ObjectStore> ObjectFs<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Opens `path` as either an object or an emulated directory.
    ///
    /// A path naming an object yields a file handle with an open byte
    /// stream. A path naming a directory marker, with or without the
    /// trailing delimiter, yields a directory handle.
    ///
    /// # Errors
    /// [`Error::InvalidPath`] before any store access for malformed paths;
    /// [`Error::NotExist`] when neither probe finds anything;
    /// [`Error::Store`] for any other store failure.
    pub async fn open(&self, path: &str) -> Result<ObjectFile<S>> {
        let resolved = resolve::resolve(self.store.as_ref(), path).await?;
        debug!(path, key = %resolved.key, kind = ?resolved.kind, "resolved");
        match resolved.kind {
            ResolvedKind::Directory => Ok(ObjectFile::directory(Arc::clone(&self.store), resolved.key)),
            ResolvedKind::File => {
                let body = self
                    .store
                    .get_object(&resolved.key)
                    .await
                    .map_err(|source| match source {
                        // Lost a race with a concurrent delete.
                        StoreError::NotFound => Error::NotExist(resolved.key.clone()),
                        source => Error::store("GetObject", resolved.key.clone(), source),
                    })?;
                Ok(ObjectFile::file(Arc::clone(&self.store), resolved.key, body))
            }
        }
    }

    /// Lists the immediate children of `path`.
    ///
    /// `""` and `"/"` both mean the bucket root. Common prefixes come
    /// first, then objects, each in store order; the directory itself is
    /// never among its own children.
    ///
    /// # Errors
    /// [`Error::Truncated`] when the store reports more results than one
    /// page; [`Error::Store`] for any other store failure.
    pub async fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>> {
        resolve::list_children(self.store.as_ref(), path).await
    }
}
