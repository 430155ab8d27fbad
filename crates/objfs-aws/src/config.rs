//! Construction-time configuration for the store client.

/// Connection parameters for an S3-compatible endpoint.
///
/// Endpoint, credentials and bucket are all required; [`AwsStore::new`]
/// validates them together and reports every missing field at once.
///
/// [`AwsStore::new`]: crate::AwsStore::new
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) bucket: String,
    pub(crate) region: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = access_key_id.into();
        self
    }

    #[must_use]
    pub fn secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = secret_access_key.into();
        self
    }

    #[must_use]
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Signing region. Optional; S3-compatible stores usually accept any
    /// value, so this defaults to `us-east-1`.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.endpoint.is_empty() {
            missing.push("endpoint");
        }
        if self.access_key_id.is_empty() {
            missing.push("access_key_id");
        }
        if self.secret_access_key.is_empty() {
            missing.push("secret_access_key");
        }
        if self.bucket.is_empty() {
            missing.push("bucket");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError { missing })
        }
    }
}

/// Aggregate validation failure: every missing field, not just the first.
#[derive(Debug, thiserror::Error)]
#[error("missing required config fields: {}", .missing.join(", "))]
pub struct ConfigError {
    missing: Vec<&'static str>,
}

impl ConfigError {
    /// Names of the fields that were left empty.
    #[must_use]
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_validates() {
        let config = Config::new()
            .endpoint("http://localhost:9000")
            .access_key_id("ak")
            .secret_access_key("sk")
            .bucket("test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn all_missing_fields_are_reported_at_once() {
        let err = Config::new().endpoint("http://localhost:9000").validate().unwrap_err();
        assert_eq!(err.missing(), ["access_key_id", "secret_access_key", "bucket"]);
        assert_eq!(
            err.to_string(),
            "missing required config fields: access_key_id, secret_access_key, bucket"
        );
    }
}
