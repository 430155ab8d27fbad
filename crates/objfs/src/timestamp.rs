//! `Last-Modified` timestamps.

use std::fmt;
use std::time::SystemTime;

use time::format_description::FormatItem;
use time::macros::format_description;

/// See <https://github.com/time-rs/time/issues/498>
const RFC1123: &[FormatItem<'_>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT");

/// A point in time parsed from a store response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(time::OffsetDateTime);

#[derive(Debug, thiserror::Error)]
#[error("time: {0}")]
pub struct ParseTimestampError(#[from] time::error::Parse);

impl Timestamp {
    /// Parses an HTTP-date header value (RFC 1123, as in `Last-Modified`).
    ///
    /// # Errors
    /// Returns an error if the string is not a valid HTTP-date.
    pub fn parse_http_date(s: &str) -> Result<Self, ParseTimestampError> {
        let dt = time::PrimitiveDateTime::parse(s, RFC1123)?;
        Ok(Self(dt.assume_utc()))
    }

    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl From<time::OffsetDateTime> for Timestamp {
    fn from(value: time::OffsetDateTime) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for time::OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        Self(time::OffsetDateTime::from(value))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(RFC1123).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
