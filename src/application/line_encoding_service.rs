// Line encoding service - Per-series width, opacity and end-point labels
use crate::domain::dataset::Dataset;
use crate::domain::encoding::{CurvePolicy, LINE_ALPHA, LineEncoding};
use crate::domain::recency::{Recency, ResponseCurve};
use crate::infrastructure::config::LineSettings;

#[derive(Debug, Clone)]
pub struct LineEncodingService {
    settings: LineSettings,
    steepness: f64,
}

impl LineEncodingService {
    pub fn new(settings: LineSettings, steepness: f64) -> Self {
        Self {
            settings,
            steepness,
        }
    }

    pub fn encode(&self, dataset: &Dataset) -> LineEncoding {
        let recency = Recency::of(&dataset.timestamps());

        let policy = self.settings.width;
        let widths = recency.channel(policy.curve(self.steepness), policy.line_width_scale());

        let alphas = match policy {
            CurvePolicy::Exponential => {
                let alphas = recency.channel(ResponseCurve::Linear, LINE_ALPHA);
                Some(if self.settings.clamp_alpha {
                    alphas.into_iter().map(|a| a.min(1.0)).collect()
                } else {
                    alphas
                })
            }
            CurvePolicy::Linear => None,
        };

        let series = dataset.series();
        let (x_end, y_end): (Vec<_>, Vec<_>) = series.iter().map(|s| s.end_point()).unzip();

        tracing::debug!(
            "Encoded {} line series (policy={:?}, degenerate_range={})",
            series.len(),
            policy,
            recency.is_degenerate()
        );

        LineEncoding {
            xs: series.iter().map(|s| s.x.clone()).collect(),
            ys: series.iter().map(|s| s.y.clone()).collect(),
            x_end,
            y_end,
            label: series.iter().map(|s| s.label()).collect(),
            widths,
            alphas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Series, Timestamp};
    use crate::domain::recency::DEFAULT_STEEPNESS;
    use crate::test_support::init_tracing;

    const EPS: f64 = 1e-12;

    fn service(width: CurvePolicy, clamp_alpha: bool) -> LineEncodingService {
        let settings = LineSettings {
            width,
            clamp_alpha,
            ..LineSettings::default()
        };
        LineEncodingService::new(settings, DEFAULT_STEEPNESS)
    }

    fn two_series() -> Dataset {
        Dataset::new(vec![
            Series::new("S1".into(), vec![1.0, 2.0], vec![5.0, 6.0], Timestamp::from_millis(1000))
                .with_origin("F1".into(), "A".into()),
            Series::new("S2".into(), vec![3.0], vec![7.0], Timestamp::from_millis(2000))
                .with_origin("F2".into(), "B".into()),
        ])
    }

    #[test]
    fn test_newer_series_is_wider_and_more_opaque() {
        init_tracing();
        let encoding = service(CurvePolicy::Exponential, false).encode(&two_series());

        assert!(encoding.widths[0] < encoding.widths[1]);
        assert!((encoding.widths[0] - 0.1).abs() < EPS);
        assert!((encoding.widths[1] - 0.6).abs() < EPS);

        let alphas = encoding.alphas.unwrap();
        assert!(alphas[0] < alphas[1]);
        assert!((alphas[0] - 0.1).abs() < EPS);
        // newest series overshoots 1.0 unless clamping is enabled
        assert!((alphas[1] - 1.1).abs() < EPS);

        assert_eq!(encoding.x_end, vec![Some(2.0), Some(3.0)]);
        assert_eq!(encoding.y_end, vec![Some(6.0), Some(7.0)]);
        assert_eq!(encoding.label, vec!["S1-F1-A", "S2-F2-B"]);
    }

    #[test]
    fn test_xs_ys_pass_through() {
        let dataset = two_series();
        let encoding = service(CurvePolicy::Exponential, false).encode(&dataset);
        assert_eq!(encoding.xs, vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(encoding.ys, vec![vec![5.0, 6.0], vec![7.0]]);
        assert_eq!(dataset, two_series());
    }

    #[test]
    fn test_clamped_alpha() {
        let encoding = service(CurvePolicy::Exponential, true).encode(&two_series());
        assert_eq!(encoding.alphas.unwrap()[1], 1.0);
    }

    #[test]
    fn test_linear_policy() {
        let dataset = Dataset::new(vec![
            Series::new("a".into(), vec![0.0], vec![0.0], Timestamp::from_millis(0)),
            Series::new("b".into(), vec![0.0], vec![0.0], Timestamp::from_millis(50)),
            Series::new("c".into(), vec![0.0], vec![0.0], Timestamp::from_millis(100)),
        ]);
        let encoding = service(CurvePolicy::Linear, false).encode(&dataset);

        assert!((encoding.widths[0] - 0.1).abs() < EPS);
        assert!((encoding.widths[1] - 0.2).abs() < EPS);
        assert!((encoding.widths[2] - 0.3).abs() < EPS);
        assert_eq!(encoding.alphas, None);
    }

    #[test]
    fn test_degenerate_range_falls_back() {
        let dataset = Dataset::new(vec![
            Series::new("a".into(), vec![1.0], vec![1.0], Timestamp::from_millis(500)),
            Series::new("b".into(), vec![2.0], vec![2.0], Timestamp::from_millis(500)),
        ]);

        let exp = service(CurvePolicy::Exponential, false).encode(&dataset);
        assert_eq!(exp.widths, vec![0.1, 0.1]);
        assert_eq!(exp.alphas, Some(vec![1.0, 1.0]));

        let lin = service(CurvePolicy::Linear, false).encode(&dataset);
        assert_eq!(lin.widths, vec![0.1, 0.1]);
    }

    #[test]
    fn test_empty_series_has_no_end_point() {
        let dataset = Dataset::new(vec![
            Series::new("a".into(), vec![], vec![], Timestamp::from_millis(0)),
            Series::new("b".into(), vec![4.0], vec![8.0], Timestamp::from_millis(10)),
        ]);
        let encoding = service(CurvePolicy::Exponential, false).encode(&dataset);
        assert_eq!(encoding.x_end, vec![None, Some(4.0)]);
        assert_eq!(encoding.y_end, vec![None, Some(8.0)]);
        assert_eq!(encoding.xs[0], Vec::<f64>::new());
    }

    #[test]
    fn test_empty_dataset() {
        let encoding = service(CurvePolicy::Exponential, false).encode(&Dataset::default());
        assert!(encoding.xs.is_empty());
        assert!(encoding.widths.is_empty());
        assert!(encoding.label.is_empty());
        assert_eq!(encoding.alphas, Some(Vec::new()));
    }
}
