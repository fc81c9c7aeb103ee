/// Identifiers issued by the remote poster API are opaque strings.
pub type RemoteId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts are integer cents to avoid float rounding.
pub type Cents = i64;
