//! Creation timestamps for catalog and checkout records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC point in time.
///
/// Wraps `DateTime<Utc>` so aggregates cannot accidentally carry a
/// local-zone value; Postgres stores it as `TIMESTAMPTZ` and the API
/// renders it as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap an already-UTC datetime, used when loading rows.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Borrow the inner datetime for query binds.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as an RFC 3339 string for API responses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
