//! Two-phase path resolution and directory emulation.
//!
//! The store has no native directories, so a path is classified by
//! probing: first as an object under the verbatim key, then, on
//! not-found, as a directory marker with the delimiter appended. Keeping
//! this an explicit two-phase algorithm makes it testable without a real
//! store behind it.

use crate::dir::{DirEntry, EntryKind};
use crate::error::{Error, Result};
use crate::path::{self, DELIMITER, DELIMITER_STR};
use crate::store::{ListOutput, ObjectStore, StoreError};

use tracing::debug;

/// What a path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedKind {
    File,
    Directory,
}

/// Outcome of the existence probe. For directories resolved through the
/// fallback, `key` carries the appended delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub(crate) key: String,
    pub(crate) kind: ResolvedKind,
}

pub(crate) async fn resolve<S: ObjectStore>(store: &S, path: &str) -> Result<Resolved> {
    path::validate(path)?;

    match store.head_object(path).await {
        Ok(_) => {
            let kind = if path.ends_with(DELIMITER) {
                ResolvedKind::Directory
            } else {
                ResolvedKind::File
            };
            Ok(Resolved {
                key: path.to_owned(),
                kind,
            })
        }
        Err(StoreError::NotFound) => {
            if path.ends_with(DELIMITER) {
                // Already probed as a marker; appending again would only
                // create an empty segment.
                return Err(Error::NotExist(path.to_owned()));
            }
            let marker = format!("{path}{DELIMITER}");
            debug!(path, "no object under verbatim key, probing directory marker");
            match store.head_object(&marker).await {
                Ok(_) => Ok(Resolved {
                    key: marker,
                    kind: ResolvedKind::Directory,
                }),
                Err(StoreError::NotFound) => Err(Error::NotExist(path.to_owned())),
                Err(source) => Err(Error::store("HeadObject", marker, source)),
            }
        }
        Err(source) => Err(Error::store("HeadObject", path, source)),
    }
}

/// Expands a directory path into its immediate children.
///
/// The delimiter bounds the store query to one level; deeper keys come
/// back collapsed into common prefixes. The directory's own marker is
/// excluded so a directory never lists itself as its own child.
pub(crate) async fn list_children<S: ObjectStore>(store: &S, path: &str) -> Result<Vec<DirEntry>> {
    if !(path.is_empty() || path == DELIMITER_STR) {
        path::validate(path)?;
    }
    let prefix = path::normalize_dir(path);

    debug!(prefix = %prefix, "listing children");
    let out = store
        .list_objects(&prefix, DELIMITER_STR)
        .await
        .map_err(|source| Error::store("ListObjectsV2", prefix.clone(), source))?;
    if out.truncated {
        return Err(Error::Truncated(prefix));
    }

    let ListOutput {
        common_prefixes,
        objects,
        ..
    } = out;

    let mut entries = Vec::with_capacity(common_prefixes.len() + objects.len());
    for raw_key in common_prefixes {
        if raw_key.eq_ignore_ascii_case(&prefix) {
            continue;
        }
        entries.push(DirEntry {
            prefix: prefix.clone(),
            raw_key,
            kind: EntryKind::Directory,
        });
    }
    for raw_key in objects {
        if raw_key.eq_ignore_ascii_case(&prefix) {
            continue;
        }
        entries.push(DirEntry {
            prefix: prefix.clone(),
            raw_key,
            kind: EntryKind::File,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HeadOutput, ObjectBody};

    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Probe-only store: records which keys were headed.
    struct ProbeStore {
        keys: HashSet<&'static str>,
        headed: Mutex<Vec<String>>,
        fail_head: bool,
    }

    impl ProbeStore {
        fn new(keys: impl IntoIterator<Item = &'static str>) -> Self {
            Self {
                keys: keys.into_iter().collect(),
                headed: Mutex::new(Vec::new()),
                fail_head: false,
            }
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for ProbeStore {
        async fn head_object(&self, key: &str) -> Result<HeadOutput, StoreError> {
            self.headed.lock().unwrap().push(key.to_owned());
            if self.fail_head {
                return Err(StoreError::other("injected failure"));
            }
            if self.keys.contains(key) {
                Ok(HeadOutput::default())
            } else {
                Err(StoreError::NotFound)
            }
        }

        async fn get_object(&self, _key: &str) -> Result<ObjectBody, StoreError> {
            Err(StoreError::NotFound)
        }

        async fn list_objects(&self, _prefix: &str, _delimiter: &str) -> Result<ListOutput, StoreError> {
            Ok(ListOutput::default())
        }
    }

    #[tokio::test]
    async fn plain_object_resolves_as_file() {
        let store = ProbeStore::new(["blog/index.png"]);
        let resolved = resolve(&store, "blog/index.png").await.unwrap();
        assert_eq!(resolved.kind, ResolvedKind::File);
        assert_eq!(resolved.key, "blog/index.png");
    }

    #[tokio::test]
    async fn marker_fallback_resolves_as_directory() {
        let store = ProbeStore::new(["blog/"]);
        let resolved = resolve(&store, "blog").await.unwrap();
        assert_eq!(resolved.kind, ResolvedKind::Directory);
        assert_eq!(resolved.key, "blog/");
        assert_eq!(*store.headed.lock().unwrap(), ["blog", "blog/"]);
    }

    #[tokio::test]
    async fn trailing_delimiter_skips_the_fallback() {
        let store = ProbeStore::new([]);
        let err = resolve(&store, "blog/").await.unwrap_err();
        assert!(err.is_not_exist());
        assert_eq!(store.headed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_both_probes_is_not_exist() {
        let store = ProbeStore::new([]);
        let err = resolve(&store, "nope").await.unwrap_err();
        assert!(err.is_not_exist());
        assert_eq!(*store.headed.lock().unwrap(), ["nope", "nope/"]);
    }

    #[tokio::test]
    async fn store_failure_is_not_absence() {
        let mut store = ProbeStore::new([]);
        store.fail_head = true;
        let err = resolve(&store, "blog").await.unwrap_err();
        assert!(matches!(err, Error::Store { op: "HeadObject", .. }));
    }

    #[tokio::test]
    async fn invalid_path_never_reaches_the_store() {
        let store = ProbeStore::new([]);
        let err = resolve(&store, "a/../b").await.unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
        assert!(store.headed.lock().unwrap().is_empty());
    }
}
