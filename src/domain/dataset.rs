// Dataset domain model - time-stamped series as handed over by the host
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Opaque identifier (series, figure or sample id). Hosts send either
/// strings or numbers; both only ever end up in labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(text) => f.write_str(text),
            Identifier::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value.into())
    }
}

/// Absolute instant, stored as UTC epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds as sent by JavaScript hosts; the fractional part
    /// is truncated. Values outside the range chrono can represent are
    /// rejected.
    pub fn from_epoch_millis(millis: f64) -> Option<Self> {
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
            .map(|t| Self(t.timestamp_millis()))
    }

    /// Parse an ISO-8601 / RFC 3339 string. Values without an offset are
    /// read as UTC.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(Self(parsed.timestamp_millis()));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
                return Some(Self(parsed.and_utc().timestamp_millis()));
            }
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Self(midnight.and_utc().timestamp_millis()))
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub sid: Identifier,
    pub figure_id: Option<Identifier>,
    pub sample_id: Option<Identifier>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub updated_at: Timestamp,
}

impl Series {
    pub fn new(sid: Identifier, x: Vec<f64>, y: Vec<f64>, updated_at: Timestamp) -> Self {
        Self {
            sid,
            figure_id: None,
            sample_id: None,
            x,
            y,
            updated_at,
        }
    }

    pub fn with_origin(mut self, figure_id: Identifier, sample_id: Identifier) -> Self {
        self.figure_id = Some(figure_id);
        self.sample_id = Some(sample_id);
        self
    }

    /// `"{SID}-{figure_id}-{sample_id}"`; a missing id leaves its segment empty.
    pub fn label(&self) -> String {
        format!(
            "{}-{}-{}",
            self.sid,
            Self::segment(&self.figure_id),
            Self::segment(&self.sample_id)
        )
    }

    /// Last x and last y, `None` for an empty series.
    pub fn end_point(&self) -> (Option<f64>, Option<f64>) {
        (self.x.last().copied(), self.y.last().copied())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn segment(id: &Option<Identifier>) -> String {
        id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// One update timestamp per series, in series order.
    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.series.iter().map(|s| s.updated_at).collect()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
