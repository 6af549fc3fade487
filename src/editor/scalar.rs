use crate::value::{number_from_f64, text_or_empty};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde_json::Value;

/// Text inputs store exactly what was typed; trimming happens when the body is cleaned.
pub fn set_text(input: &str) -> Value {
    Value::String(input.to_string())
}

/// Parses a number input. Empty or unparsable input leaves the field unset.
pub fn set_number(input: &str) -> Option<Value> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().and_then(number_from_f64)
}

/// Date and time halves of an ISO-8601 UTC timestamp (`YYYY-MM-DDTHH:MM:SSZ`).
///
/// The stored value is always the recombined string; the halves only exist while editing.
/// Without a date there is no timestamp, whatever the time half holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeParts {
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .into_iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
}

impl DateTimeParts {
    pub fn from_value(current: Option<&Value>) -> Self {
        Self::parse(text_or_empty(current))
    }

    /// Splits a timestamp. A date without a time reads as midnight. Explicit offsets are
    /// converted to UTC and fractional seconds dropped. Anything else reads as empty.
    pub fn parse(iso: &str) -> Self {
        let iso = iso.trim();
        if let Ok(stamp) = DateTime::parse_from_rfc3339(iso) {
            let utc = stamp.with_timezone(&Utc).naive_utc();
            return Self {
                date: Some(utc.date()),
                time: utc.time().with_nanosecond(0).unwrap_or_default(),
            };
        }

        let (date, time) = match iso.split_once('T') {
            Some((date, time)) => (date, Some(time.strip_suffix('Z').unwrap_or(time))),
            None => (iso, None),
        };
        let parsed = parse_date(date).and_then(|date| {
            let time = match time {
                Some(time) => parse_time(time)?,
                None => NaiveTime::default(),
            };
            Some(Self {
                date: Some(date),
                time,
            })
        });
        parsed.unwrap_or_default()
    }

    /// An empty date unsets the timestamp; text that is not a `YYYY-MM-DD` date is ignored.
    pub fn with_date(mut self, date: &str) -> Self {
        let date = date.trim();
        if date.is_empty() {
            self.date = None;
        } else if let Some(parsed) = parse_date(date) {
            self.date = Some(parsed);
        }
        self
    }

    /// An empty time resets to midnight; text that is not `HH:MM` or `HH:MM:SS` is ignored.
    pub fn with_time(mut self, time: &str) -> Self {
        let time = time.trim();
        if time.is_empty() {
            self.time = NaiveTime::default();
        } else if let Some(parsed) = parse_time(time) {
            self.time = parsed;
        }
        self
    }

    pub fn to_iso(&self) -> Option<String> {
        self.date
            .map(|date| date.and_time(self.time).format(ISO_FORMAT).to_string())
    }

    pub fn to_value(&self) -> Option<Value> {
        self.to_iso().map(Value::String)
    }
}
