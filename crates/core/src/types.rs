/// Primary keys of stored reports and users (Postgres BIGSERIAL).
pub type DbId = i64;

/// Stored timestamps are always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
