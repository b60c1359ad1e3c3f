//! Julian day helpers for building requests

use chrono::{DateTime, Utc};

/// Julian day of the J2000.0 epoch (2000-01-01T12:00:00 UT).
pub const J2000: f64 = 2451545.0;

/// Julian day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day (UT) of a UTC instant.
///
/// UTC and UT1 differ by less than a second; the difference is ignored.
pub fn julian_day_ut(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}
