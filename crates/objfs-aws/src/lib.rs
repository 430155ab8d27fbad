//! `objfs` storage client backed by `aws-sdk-s3`.
//!
//! Implements [`objfs::store::ObjectStore`] against any S3-compatible
//! endpoint: `HeadObject`, `GetObject` and single-page `ListObjectsV2`
//! with prefix and delimiter. "Not found" responses are classified into
//! [`StoreError::NotFound`](objfs::store::StoreError::NotFound) so the
//! resolver's directory-marker fallback can kick in; everything else is
//! surfaced verbatim.
//!
//! ```rust,no_run
//! use objfs::ObjectFs;
//! use objfs_aws::{AwsStore, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = AwsStore::new(
//!     Config::new()
//!         .endpoint("http://localhost:9000")
//!         .access_key_id("minioadmin")
//!         .secret_access_key("minioadmin")
//!         .bucket("blog"),
//! )?;
//! let fs = ObjectFs::new(store);
//! for entry in fs.read_dir("/").await? {
//!     println!("{} dir={}", entry.name(), entry.is_dir());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;

pub use self::client::AwsStore;
pub use self::config::{Config, ConfigError};
