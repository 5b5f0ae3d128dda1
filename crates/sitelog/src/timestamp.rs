//! Timestamp generators

use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Zero-argument timestamp generator, invoked once per log call
pub type TimestampFn = Arc<dyn Fn() -> String + Send + Sync>;

const ISO8601_MILLIS: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Format a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn format_iso8601(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);
    at.format(ISO8601_MILLIS)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Generator producing the current UTC time in ISO-8601 with milliseconds
pub fn iso8601() -> TimestampFn {
    Arc::new(|| format_iso8601(OffsetDateTime::now_utc()))
}

/// Generator producing the current Unix time in milliseconds
pub fn unix_millis() -> TimestampFn {
    Arc::new(|| (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string())
}

/// Generator that always returns the same text
pub fn fixed(text: impl Into<String>) -> TimestampFn {
    let text = text.into();
    Arc::new(move || text.clone())
}
