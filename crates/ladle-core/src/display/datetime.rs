//! DateTime display utilities.
//!
//! The server hands out timestamps as opaque strings. These wrappers show
//! them in the local timezone when they parse, and verbatim otherwise.

use std::fmt;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A server-assigned timestamp string.
///
/// RFC 3339 instants are shown through [`LocalDateTime`], civil date-times
/// without an offset are shown as-is but normalized, and anything else is
/// passed through untouched.
pub struct ServerTime<'a>(pub &'a str);

impl fmt::Display for ServerTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(timestamp) = self.0.parse::<Timestamp>() {
            return write!(f, "{}", LocalDateTime(&timestamp));
        }
        if let Ok(civil) = self.0.parse::<DateTime>() {
            return write!(f, "{}", civil.strftime("%Y-%m-%d %H:%M:%S"));
        }
        f.write_str(self.0)
    }
}
