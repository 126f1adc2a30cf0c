use chrono::{DateTime, Utc};

pub fn current_datetime() -> DateTime<Utc> {
  chrono::offset::Utc::now()
}

/**
 * Render a span of seconds the way elapsed durations are shown to API clients:
 * H:MM:SS, prefixed with "N day, " or "N days, " once it reaches 24 hours.
 * The sign is dropped, callers pass absolute spans.
 */
pub fn secs_to_duration_string(secs: i64) -> String {
  let secs = secs.abs();
  let days = secs / 86_400;
  let rem = secs % 86_400;
  let hms = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);
  match days {
    0 => hms,
    1 => format!("1 day, {}", hms),
    _ => format!("{} days, {}", days, hms),
  }
}
