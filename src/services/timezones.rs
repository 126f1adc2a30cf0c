use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

pub fn is_valid_zone_name(zn: &str) -> bool {
    zn.parse::<Tz>().is_ok()
}

/// Offset from UTC in seconds of an IANA zone at the given instant, daylight saving included.
pub fn utc_offset_secs(zn: &str, at: &DateTime<Utc>) -> Option<i32> {
    let tz: Tz = zn.parse().ok()?;
    Some(tz.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc())
}
