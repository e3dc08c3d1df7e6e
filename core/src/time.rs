//! Time related utils.

use chrono::Utc;
use std::fmt::Debug;

/// DateTime used by laws, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic format: `20220313T072004Z`
///
/// Fractional seconds are dropped.
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Clock is the source of the signing time.
///
/// The signer reads the clock only when the request doesn't carry an
/// explicit date.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current instant in UTC.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// FixedClock always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
