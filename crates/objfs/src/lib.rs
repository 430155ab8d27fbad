//! Read-only filesystem view over a flat object-storage bucket.
//!
//! Object stores address data by flat keys, not paths. `objfs` adapts a
//! bucket into a hierarchical, path-addressable view: open a path, list a
//! directory, stat an entry, read bytes, close. Directory semantics are
//! synthesized from key prefixes and the `/` delimiter.
//!
//! # Architecture
//!
//! The storage client is an external collaborator behind the
//! [`ObjectStore`](store::ObjectStore) trait, which needs exactly three
//! primitives: a head-style lookup, an object download, and a one-level
//! delimiter listing. On top of that:
//!
//! - the resolver classifies a path as object or directory with a
//!   two-phase probe (verbatim key first, then directory marker), and
//!   expands directories into their immediate children;
//! - [`ObjectFile`] is a lazily-populated handle bound to a resolved
//!   path: sequential byte reads for objects, on-demand metadata
//!   synthesis from store headers for both kinds.
//!
//! The view is read-only and single-shot per call: no caching, no
//! retries, no pagination. A truncated listing surfaces as
//! [`Error::Truncated`] rather than being silently under-reported.
//!
//! For an `aws-sdk-s3` backed [`ObjectStore`](store::ObjectStore)
//! implementation, see the `objfs-aws` crate.

mod dir;
mod error;
mod file;
mod fs;
mod path;
mod resolve;
mod timestamp;

pub mod store;

pub use self::dir::{DirEntry, EntryKind};
pub use self::error::{Error, MetadataParseError, Result};
pub use self::file::{Metadata, ObjectFile};
pub use self::fs::ObjectFs;
pub use self::path::DELIMITER;
pub use self::timestamp::{ParseTimestampError, Timestamp};
