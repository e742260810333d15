use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

pub const MISSING_TIME: &str = "-";

const SERVER_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Zone-less server timestamps are UTC.
    SERVER_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Relative age of a server timestamp, falling back to `MM-DD HH:MM` in the
/// timezone of `now` once it is a week old. Unparsable input is returned as-is.
pub fn format_time<Tz>(raw: Option<&str>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MISSING_TIME.to_string(),
    };
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let elapsed = now.with_timezone(&Utc) - at;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} h ago", hours)
    } else if days < 7 {
        format!("{} d ago", days)
    } else {
        at.with_timezone(&now.timezone()).format("%m-%d %H:%M").to_string()
    }
}
