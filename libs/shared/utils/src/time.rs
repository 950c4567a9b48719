use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Naive layouts accepted in addition to RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parses a caller-supplied ISO-8601 instant.
///
/// Accepts RFC 3339 with any offset, a naive date-time (taken as UTC) or a
/// bare date (UTC midnight). Returns `None` for anything else.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc());

    if parsed.is_none() {
        debug!("Rejected unparseable instant: {}", raw);
    }
    parsed
}

/// Resolves an optional IANA zone name, falling back to `default` when the
/// caller sent nothing. Unknown names come back as `Err(name)`.
pub fn resolve_time_zone(name: Option<&str>, default: Tz) -> Result<Tz, String> {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        None => Ok(default),
        Some(name) => name.parse::<Tz>().map_err(|_| name.to_string()),
    }
}

/// Millisecond-precision UTC timestamp, e.g. `2024-10-30T10:00:00.000Z`.
pub fn to_provider_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
