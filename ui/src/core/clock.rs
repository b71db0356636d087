//! Wall-clock helpers.

use time::{OffsetDateTime, UtcOffset};

/// Local UTC offset, or UTC when the platform cannot report it soundly.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Current instant in the local offset.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}
