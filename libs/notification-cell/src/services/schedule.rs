use chrono::{DateTime, Datelike, Offset, Timelike, Utc};
use chrono_tz::Tz;

const CONVERTER_BASE_URL: &str = "https://www.timeanddate.com/worldclock/converter.html";

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// How an appointment instant is presented to the patient.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSchedule {
    /// e.g. `miércoles, 30 de octubre de 2024, 05:00 a. m.`
    pub when_local: String,
    /// e.g. `GMT-05:00`
    pub offset_label: String,
    /// Deep link to a world-clock converter for the instant.
    pub converter_url: String,
}

impl LocalSchedule {
    pub fn new(instant: DateTime<Utc>, time_zone: Tz) -> Self {
        Self {
            when_local: format_local(instant, time_zone),
            offset_label: offset_label(instant, time_zone),
            converter_url: converter_url(instant),
        }
    }
}

pub fn format_local(instant: DateTime<Utc>, time_zone: Tz) -> String {
    let local = instant.with_timezone(&time_zone);
    let (is_pm, hour) = local.hour12();

    format!(
        "{}, {} de {} de {}, {:02}:{:02} {}",
        WEEKDAYS[local.weekday().num_days_from_monday() as usize],
        local.day(),
        MONTHS[local.month0() as usize],
        local.year(),
        hour,
        local.minute(),
        if is_pm { "p. m." } else { "a. m." }
    )
}

/// UTC offset of `time_zone` at `instant`, `GMT` when it is zero.
pub fn offset_label(instant: DateTime<Utc>, time_zone: Tz) -> String {
    let seconds = instant
        .with_timezone(&time_zone)
        .offset()
        .fix()
        .local_minus_utc();

    if seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    format!("GMT{}{:02}:{:02}", sign, seconds / 3600, (seconds % 3600) / 60)
}

pub fn converter_url(instant: DateTime<Utc>) -> String {
    format!(
        "{}?iso={}&p1=1440",
        CONVERTER_BASE_URL,
        instant.format("%Y%m%dT%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{America, Asia, Europe, UTC};

    #[test]
    fn test_format_local_morning() {
        let instant = Utc.with_ymd_and_hms(2024, 10, 30, 10, 0, 0).unwrap();
        assert_eq!(
            format_local(instant, America::Guayaquil),
            "miércoles, 30 de octubre de 2024, 05:00 a. m."
        );
    }

    #[test]
    fn test_format_local_afternoon_and_date_rollover() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 18, 45, 0).unwrap();
        assert_eq!(
            format_local(instant, Asia::Kolkata),
            "miércoles, 6 de marzo de 2024, 12:15 a. m."
        );
        assert_eq!(
            format_local(instant, America::Guayaquil),
            "martes, 5 de marzo de 2024, 01:45 p. m."
        );
    }

    #[test]
    fn test_offset_label() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();

        assert_eq!(offset_label(winter, America::Guayaquil), "GMT-05:00");
        assert_eq!(offset_label(winter, Europe::Madrid), "GMT+01:00");
        assert_eq!(offset_label(summer, Europe::Madrid), "GMT+02:00");
        assert_eq!(offset_label(summer, Asia::Kolkata), "GMT+05:30");
        assert_eq!(offset_label(summer, UTC), "GMT");
    }

    #[test]
    fn test_converter_url_strips_punctuation() {
        let instant = Utc.with_ymd_and_hms(2024, 10, 30, 10, 0, 0).unwrap();
        assert_eq!(
            converter_url(instant),
            "https://www.timeanddate.com/worldclock/converter.html?iso=20241030T100000&p1=1440"
        );
    }
}
