// Scatter encoding service - Flattens series into points sized by recency
use crate::domain::dataset::Dataset;
use crate::domain::encoding::ScatterEncoding;
use crate::domain::recency::Recency;
use crate::infrastructure::config::ScatterSettings;

#[derive(Debug, Clone)]
pub struct ScatterEncodingService {
    settings: ScatterSettings,
    steepness: f64,
}

impl ScatterEncodingService {
    pub fn new(settings: ScatterSettings, steepness: f64) -> Self {
        Self {
            settings,
            steepness,
        }
    }

    pub fn encode(&self, dataset: &Dataset) -> ScatterEncoding {
        let capacity = dataset.point_count();
        let mut x = Vec::with_capacity(capacity);
        let mut y = Vec::with_capacity(capacity);
        let mut sid = Vec::with_capacity(capacity);
        let mut timestamps = Vec::with_capacity(capacity);

        // Series-major; every point inherits its series' update time.
        for series in dataset.series() {
            for (&px, &py) in series.x.iter().zip(&series.y) {
                x.push(px);
                y.push(py);
                sid.push(series.sid.clone());
                timestamps.push(series.updated_at);
            }
        }

        let policy = self.settings.size;
        let curve = policy.curve(self.steepness);
        let recency = Recency::of(&timestamps);
        let size = recency.channel(curve, policy.marker_size_scale());
        let line_size = recency.channel(curve, policy.marker_line_scale());

        tracing::debug!(
            "Flattened {} series into {} points (policy={:?}, degenerate_range={})",
            dataset.len(),
            x.len(),
            policy,
            recency.is_degenerate()
        );

        ScatterEncoding {
            x,
            y,
            sid,
            size,
            line_size,
        }
    }
}
