mod post_repository;
mod user_repository;

pub use post_repository::PostRepository;
pub use user_repository::UserRepository;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a `created_at` column value. Rows written through the column
/// default use SQLite's `CURRENT_TIMESTAMP` format; RFC 3339 is accepted
/// as a fallback.
pub(crate) fn parse_created_at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .or_else(|_| s.parse::<DateTime<Utc>>())
        .unwrap()
}

/// Whether `err` wraps a SQLite constraint violation (UNIQUE, FOREIGN KEY).
/// Handlers use this to report conflicts as client errors.
pub fn is_constraint_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_default_timestamp_format() {
        let parsed = parse_created_at("2024-01-10 10:00:00");
        assert_eq!(parsed.to_rfc3339(), "2024-01-10T10:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_fallback() {
        let parsed = parse_created_at("2024-01-10T10:00:00+00:00");
        assert_eq!(parsed.to_rfc3339(), "2024-01-10T10:00:00+00:00");
    }
}
