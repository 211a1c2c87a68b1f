// Visual encoding domain models - channels derived from series recency
use super::dataset::Identifier;
use super::recency::{ChannelScale, ResponseCurve};
use serde::Deserialize;

pub const LINEAR_LINE_WIDTH: ChannelScale = ChannelScale::new(0.1, 0.2, 0.1);
pub const EXPONENTIAL_LINE_WIDTH: ChannelScale = ChannelScale::new(0.1, 0.5, 0.1);

/// Opacity is always linear in recency. The 0.1 offset keeps the oldest
/// series visible and lets the newest one reach 1.1.
pub const LINE_ALPHA: ChannelScale = ChannelScale::new(0.1, 1.0, 1.0);

pub const EXPONENTIAL_MARKER_SIZE: ChannelScale = ChannelScale::new(2.0, 8.0, 10.0);
pub const EXPONENTIAL_MARKER_LINE: ChannelScale = ChannelScale::new(0.1, 0.4, 0.5);
pub const LINEAR_MARKER_SIZE: ChannelScale = ChannelScale::new(2.0, 4.0, 2.0);
pub const LINEAR_MARKER_LINE: ChannelScale = ChannelScale::new(0.1, 0.4, 0.1);

/// Which response curve drives a family of channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurvePolicy {
    Linear,
    #[default]
    Exponential,
}

impl CurvePolicy {
    pub fn curve(self, steepness: f64) -> ResponseCurve {
        match self {
            CurvePolicy::Linear => ResponseCurve::Linear,
            CurvePolicy::Exponential => ResponseCurve::Exponential { steepness },
        }
    }

    pub fn line_width_scale(self) -> ChannelScale {
        match self {
            CurvePolicy::Linear => LINEAR_LINE_WIDTH,
            CurvePolicy::Exponential => EXPONENTIAL_LINE_WIDTH,
        }
    }

    pub fn marker_size_scale(self) -> ChannelScale {
        match self {
            CurvePolicy::Linear => LINEAR_MARKER_SIZE,
            CurvePolicy::Exponential => EXPONENTIAL_MARKER_SIZE,
        }
    }

    pub fn marker_line_scale(self) -> ChannelScale {
        match self {
            CurvePolicy::Linear => LINEAR_MARKER_LINE,
            CurvePolicy::Exponential => EXPONENTIAL_MARKER_LINE,
        }
    }
}

/// Per-series channels for a multi-line plot. All vectors are indexed by
/// series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEncoding {
    pub xs: Vec<Vec<f64>>,
    pub ys: Vec<Vec<f64>>,
    pub x_end: Vec<Option<f64>>,
    pub y_end: Vec<Option<f64>>,
    pub label: Vec<String>,
    pub widths: Vec<f64>,
    /// Only produced by the exponential width policy.
    pub alphas: Option<Vec<f64>>,
}

/// Flattened point stream for scatter rendering. All vectors are indexed
/// by point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterEncoding {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub sid: Vec<Identifier>,
    pub size: Vec<f64>,
    pub line_size: Vec<f64>,
}

impl ScatterEncoding {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
