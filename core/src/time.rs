//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as the `oauth_timestamp` value: seconds since the unix epoch.
///
/// ```
/// use oauthsign_core::time::{format_unix_timestamp, parse_unix_timestamp};
///
/// let t = parse_unix_timestamp(1318622958).unwrap();
/// assert_eq!(format_unix_timestamp(t), "1318622958");
/// ```
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Build a datetime from seconds since the unix epoch.
pub fn parse_unix_timestamp(secs: i64) -> crate::Result<DateTime> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        crate::Error::config_invalid(format!("timestamp {secs} is out of range"))
    })
}
