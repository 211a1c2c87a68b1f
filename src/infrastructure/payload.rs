// Callback payload schema - validates the host's column arrays into a Dataset
use crate::domain::dataset::{Dataset, Identifier, Series, Timestamp};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("`{field}` has {actual} entries but `x` has {expected} series")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("series {series}: x has {x_len} points but y has {y_len}")]
    PointCountMismatch {
        series: usize,
        x_len: usize,
        y_len: usize,
    },

    #[error("series {series}: `{value}` is not a timestamp")]
    InvalidTimestamp { series: usize, value: String },
}

/// `{ "data": { ... } }` as delivered by the host's data callback.
#[derive(Debug, Deserialize)]
pub struct CallbackPayload {
    pub data: SeriesColumns,
}

/// Parallel per-series arrays; entry `i` of every column describes series `i`.
#[derive(Debug, Deserialize)]
pub struct SeriesColumns {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub updated_at: Vec<RawTimestamp>,
    #[serde(rename = "SID")]
    pub sid: Vec<Identifier>,
    #[serde(default)]
    pub figure_id: Option<Vec<Identifier>>,
    #[serde(default)]
    pub sample_id: Option<Vec<Identifier>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    EpochMillis(f64),
    Text(String),
}

impl RawTimestamp {
    fn resolve(&self, series: usize) -> Result<Timestamp, PayloadError> {
        let parsed = match self {
            RawTimestamp::EpochMillis(millis) => Timestamp::from_epoch_millis(*millis),
            RawTimestamp::Text(text) => Timestamp::parse(text),
        };
        parsed.ok_or_else(|| PayloadError::InvalidTimestamp {
            series,
            value: match self {
                RawTimestamp::EpochMillis(millis) => millis.to_string(),
                RawTimestamp::Text(text) => text.clone(),
            },
        })
    }
}

impl CallbackPayload {
    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_dataset(self) -> Result<Dataset, PayloadError> {
        self.data.into_dataset()
    }
}

impl SeriesColumns {
    pub fn into_dataset(self) -> Result<Dataset, PayloadError> {
        let expected = self.x.len();
        check_len("y", expected, self.y.len())?;
        check_len("updated_at", expected, self.updated_at.len())?;
        check_len("SID", expected, self.sid.len())?;
        if let Some(ids) = &self.figure_id {
            check_len("figure_id", expected, ids.len())?;
        }
        if let Some(ids) = &self.sample_id {
            check_len("sample_id", expected, ids.len())?;
        }

        let mut figure_ids = self.figure_id.map(Vec::into_iter);
        let mut sample_ids = self.sample_id.map(Vec::into_iter);

        let mut series = Vec::with_capacity(expected);
        for (index, (((x, y), raw_ts), sid)) in self
            .x
            .into_iter()
            .zip(self.y)
            .zip(&self.updated_at)
            .zip(self.sid)
            .enumerate()
        {
            if x.len() != y.len() {
                return Err(PayloadError::PointCountMismatch {
                    series: index,
                    x_len: x.len(),
                    y_len: y.len(),
                });
            }

            let updated_at = raw_ts.resolve(index)?;
            let mut entry = Series::new(sid, x, y, updated_at);
            entry.figure_id = figure_ids.as_mut().and_then(Iterator::next);
            entry.sample_id = sample_ids.as_mut().and_then(Iterator::next);
            series.push(entry);
        }

        Ok(Dataset::new(series))
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), PayloadError> {
    if actual != expected {
        return Err(PayloadError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
