//! Date display utilities.
//!
//! Wrapper types that format calendar dates and timestamps the way the
//! generated reports print them.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A calendar date formatted as `Month DD, YYYY`, e.g. `October 21, 1994`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %d, %Y"))
    }
}

/// A calendar date formatted as `YYYY-MM-DD`.
pub struct IsoDate(pub Date);

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d"))
    }
}

/// A generation timestamp formatted in UTC as
/// `Month DD, YYYY at HH:MM UTC`.
pub struct GeneratedAt<'a>(pub &'a Timestamp);

impl fmt::Display for GeneratedAt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::UTC)
                .strftime("%B %d, %Y at %H:%M UTC")
        )
    }
}

/// English name of the weekday of `date`, e.g. `Sunday`.
pub fn weekday_name(date: Date) -> String {
    date.strftime("%A").to_string()
}
