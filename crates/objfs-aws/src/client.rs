//! `ObjectStore` implementation on top of `aws-sdk-s3`.

use crate::config::{Config, ConfigError};

use objfs::store::{HeadOutput, ListOutput, ObjectBody, ObjectStore, StoreError};

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_smithy_types::DateTime;
use aws_smithy_types::date_time::Format;

use tokio_util::io::ReaderStream;
use tracing::debug;

const DEFAULT_REGION: &str = "us-east-1";

/// A bucket-scoped storage client for S3-compatible endpoints.
///
/// Stateless per call; a single instance can serve any number of
/// concurrent handles. Construction is side-effect-free: no request is
/// issued until the first operation.
#[derive(Clone)]
pub struct AwsStore {
    client: Client,
    bucket: String,
}

impl AwsStore {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    /// [`ConfigError`] listing every missing required field.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let credentials = Credentials::new(config.access_key_id, config.secret_access_key, None, None, "objfs");
        let region = config.region.unwrap_or_else(|| DEFAULT_REGION.to_owned());
        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .endpoint_url(config.endpoint)
            .region(Region::new(region))
            // S3-compatible stores route by path, not by virtual host
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(sdk_config),
            bucket: config.bucket,
        })
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

fn http_date(dt: &DateTime) -> Result<String, StoreError> {
    dt.fmt(Format::HttpDate).map_err(StoreError::other)
}

#[async_trait::async_trait]
impl ObjectStore for AwsStore {
    async fn head_object(&self, key: &str) -> Result<HeadOutput, StoreError> {
        debug!(bucket = %self.bucket, key, "HeadObject");
        let result = self.client.head_object().bucket(&self.bucket).key(key).send().await;
        match result {
            Ok(out) => Ok(HeadOutput {
                content_length: out.content_length().map(|n| n.to_string()),
                last_modified: out.last_modified().map(http_date).transpose()?,
            }),
            Err(err) => {
                if err.as_service_error().is_some_and(|e| e.is_not_found()) {
                    Err(StoreError::NotFound)
                } else {
                    Err(StoreError::other(err))
                }
            }
        }
    }

    async fn get_object(&self, key: &str) -> Result<ObjectBody, StoreError> {
        debug!(bucket = %self.bucket, key, "GetObject");
        let result = self.client.get_object().bucket(&self.bucket).key(key).send().await;
        match result {
            Ok(out) => {
                let body: ObjectBody = Box::pin(ReaderStream::new(out.body.into_async_read()));
                Ok(body)
            }
            Err(err) => {
                if err.as_service_error().is_some_and(|e| e.is_no_such_key()) {
                    Err(StoreError::NotFound)
                } else {
                    Err(StoreError::other(err))
                }
            }
        }
    }

    async fn list_objects(&self, prefix: &str, delimiter: &str) -> Result<ListOutput, StoreError> {
        debug!(bucket = %self.bucket, prefix, delimiter, "ListObjectsV2");
        let mut req = self.client.list_objects_v2().bucket(&self.bucket).delimiter(delimiter);
        if !prefix.is_empty() {
            req = req.prefix(prefix);
        }
        let out = req.send().await.map_err(StoreError::other)?;

        Ok(ListOutput {
            common_prefixes: out
                .common_prefixes()
                .iter()
                .filter_map(|p| p.prefix().map(str::to_owned))
                .collect(),
            objects: out.contents().iter().filter_map(|o| o.key().map(str::to_owned)).collect(),
            truncated: out.is_truncated().unwrap_or(false),
        })
    }
}
