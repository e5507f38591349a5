use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

/// Day of week with Sunday = 0 .. Saturday = 6.
pub(crate) fn weekday_index(instant: &DateTime<Utc>) -> usize {
    instant.weekday().num_days_from_sunday() as usize
}

pub(crate) fn hour_index(instant: &DateTime<Utc>) -> usize {
    instant.hour() as usize
}

/// `hour:00:00` UTC on `date`.
pub(crate) fn at_hour(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    date.and_hms_opt(hour, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub(crate) fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}
