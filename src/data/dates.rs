use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::data::error::DataError;

pub const DEFAULT_INTERVAL_MINUTES: i64 = 30;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD HH:MM:SS+HH:MM`, RFC 3339, or a bare `YYYY-MM-DD`
/// (taken as midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, DataError> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).into())
        .ok_or_else(|| DataError::Timestamp(value.to_string()))
}

/// Maps timestamps to the number of whole fixed-width intervals elapsed since
/// a start instant (30 minutes by default), so a time axis can be fed to a
/// regressor as a plain number.
#[derive(Debug, Clone, PartialEq)]
pub struct DateConverter {
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
    interval_minutes: i64,
}

impl DateConverter {
    pub fn new(start: &str) -> Result<DateConverter, DataError> {
        Ok(DateConverter {
            start: parse_timestamp(start)?,
            end: None,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        })
    }

    pub fn with_end(mut self, end: &str) -> Result<DateConverter, DataError> {
        self.end = Some(parse_timestamp(end)?);
        Ok(self)
    }

    pub fn with_interval_minutes(mut self, minutes: i64) -> Result<DateConverter, DataError> {
        if minutes <= 0 {
            return Err(DataError::Interval(minutes));
        }
        self.interval_minutes = minutes;
        Ok(self)
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn interval_minutes(&self) -> i64 {
        self.interval_minutes
    }

    /// Whole intervals between the start and `timestamp`, rounded down.
    /// Timestamps before the start give negative counts.
    pub fn date_to_intervals(&self, timestamp: &str) -> Result<i64, DataError> {
        let ts = parse_timestamp(timestamp)?;
        Ok(self.intervals_between(ts))
    }

    /// Start of interval `intervals`, formatted in the start's offset.
    /// `None` when the instant falls outside chrono's representable range.
    pub fn intervals_to_date(&self, intervals: i64) -> Option<String> {
        let minutes = intervals.checked_mul(self.interval_minutes)?;
        let ts = self.start.checked_add_signed(Duration::try_minutes(minutes)?)?;
        Some(ts.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Intervals from start to end; `None` without an end date.
    pub fn total_intervals(&self) -> Option<i64> {
        self.end.map(|end| self.intervals_between(end))
    }

    fn intervals_between(&self, ts: DateTime<FixedOffset>) -> i64 {
        (ts - self.start).num_minutes().div_euclid(self.interval_minutes)
    }
}
