// Recency normalization - maps update timestamps onto [0, 1]
use super::dataset::Timestamp;

/// Steepness used by the exponential curve unless configured otherwise.
pub const DEFAULT_STEEPNESS: f64 = 3.0;

/// Observed span of a set of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    min: i64,
    max: i64,
}

impl TimeRange {
    /// `None` for an empty set.
    pub fn of<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = Timestamp>,
    {
        timestamps.into_iter().fold(None, |range, t| {
            let t = t.as_millis();
            Some(match range {
                None => Self { min: t, max: t },
                Some(Self { min, max }) => Self {
                    min: min.min(t),
                    max: max.max(t),
                },
            })
        })
    }

    /// All timestamps equal; relative recency is undefined.
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Linear position of `t` inside the range, `None` when degenerate.
    pub fn normalize(&self, t: Timestamp) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        // i128 so spans near the i64 limits cannot overflow
        let span = (self.max as i128 - self.min as i128) as f64;
        Some((t.as_millis() as i128 - self.min as i128) as f64 / span)
    }
}

/// Response curve applied on top of the linear position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseCurve {
    Linear,
    /// `(e^(k·x) - 1) / (e^k - 1)`: keeps 0 and 1 fixed but pushes most of
    /// the growth towards 1, so the newest entries stand out.
    Exponential { steepness: f64 },
}

impl ResponseCurve {
    pub fn apply(&self, norm: f64) -> f64 {
        match *self {
            ResponseCurve::Linear => norm,
            // k -> 0 converges to the linear curve
            ResponseCurve::Exponential { steepness } if steepness == 0.0 => norm,
            ResponseCurve::Exponential { steepness: k } if k > 1.0 => {
                // Same ratio divided through by e^k; stays finite for large k.
                let floor = (-k).exp();
                ((k * (norm - 1.0)).exp() - floor) / (1.0 - floor)
            }
            ResponseCurve::Exponential { steepness: k } => (k * norm).exp_m1() / k.exp_m1(),
        }
    }
}

/// Affine mapping of a normalized value onto a visual channel, plus the
/// value used when the time range is degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScale {
    pub base: f64,
    pub span: f64,
    pub fallback: f64,
}

impl ChannelScale {
    pub const fn new(base: f64, span: f64, fallback: f64) -> Self {
        Self {
            base,
            span,
            fallback,
        }
    }

    pub fn at(&self, value: f64) -> f64 {
        self.base + value * self.span
    }
}

/// Linear recency of one set of timestamps. Scans the set once; any number
/// of channels can then be projected from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recency {
    /// `None` when the range is degenerate.
    linear: Option<Vec<f64>>,
    len: usize,
}

impl Recency {
    pub fn of(timestamps: &[Timestamp]) -> Self {
        let linear = match TimeRange::of(timestamps.iter().copied()) {
            None => Some(Vec::new()),
            Some(range) => timestamps.iter().map(|&t| range.normalize(t)).collect(),
        };
        Self {
            linear,
            len: timestamps.len(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.linear.is_none()
    }

    /// Values in [0, 1] under `curve`, `None` when degenerate.
    pub fn normalized(&self, curve: ResponseCurve) -> Option<Vec<f64>> {
        self.linear
            .as_ref()
            .map(|values| values.iter().map(|&v| curve.apply(v)).collect())
    }

    /// Project onto `scale`, substituting `scale.fallback` everywhere when the
    /// range is degenerate.
    pub fn channel(&self, curve: ResponseCurve, scale: ChannelScale) -> Vec<f64> {
        match &self.linear {
            Some(values) => values.iter().map(|&v| scale.at(curve.apply(v))).collect(),
            None => vec![scale.fallback; self.len],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeNormalizer {
    curve: ResponseCurve,
}

impl TimeNormalizer {
    pub fn new(curve: ResponseCurve) -> Self {
        Self { curve }
    }

    pub fn linear() -> Self {
        Self::new(ResponseCurve::Linear)
    }

    pub fn exponential(steepness: f64) -> Self {
        Self::new(ResponseCurve::Exponential { steepness })
    }

    /// One value in [0, 1] per timestamp, same order. Returns `None` when the
    /// range is degenerate so callers substitute their own fallback; an empty
    /// input yields an empty vector.
    pub fn normalize(&self, timestamps: &[Timestamp]) -> Option<Vec<f64>> {
        Recency::of(timestamps).normalized(self.curve)
    }

    pub fn encode(&self, timestamps: &[Timestamp], scale: ChannelScale) -> Vec<f64> {
        Recency::of(timestamps).channel(self.curve, scale)
    }
}
