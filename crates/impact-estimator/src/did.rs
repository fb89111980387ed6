//! Difference-in-differences estimation.

use tracing::debug;

use impact_model::Panel;

use crate::error::Result;
use crate::stats::mean;

/// Two-period difference-in-differences estimator.
///
/// Compares the pre→post outcome change of the treated group against the
/// control group's change over the same periods. Group membership is exact
/// equality on the treated flag; period membership is exact equality on the
/// time markers. The estimator is region-agnostic: when several regions are
/// treated, their observations pool into one treated average.
#[derive(Debug, Clone, Copy)]
pub struct DidEstimator {
    /// Pre-treatment time marker.
    pub pre: f64,
    /// Post-treatment time marker.
    pub post: f64,
}

impl DidEstimator {
    pub fn new(pre: f64, post: f64) -> Self {
        Self { pre, post }
    }

    /// Estimate the treatment effect.
    ///
    /// Errors when any of the four treated/control × pre/post groups is
    /// empty (surfaced from the mean primitive).
    pub fn estimate(&self, panel: &Panel) -> Result<f64> {
        let pre_treated = mean(&panel.outcomes(true, self.pre))?;
        let post_treated = mean(&panel.outcomes(true, self.post))?;
        let pre_control = mean(&panel.outcomes(false, self.pre))?;
        let post_control = mean(&panel.outcomes(false, self.post))?;

        let effect = (post_treated - pre_treated) - (post_control - pre_control);
        debug!(
            pre = self.pre,
            post = self.post,
            effect,
            "difference-in-differences estimated"
        );
        Ok(effect)
    }
}

impl Default for DidEstimator {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimatorError;
    use impact_model::PanelRecord;

    fn record(region: &str, time: f64, treated: bool, outcome: f64) -> PanelRecord {
        PanelRecord {
            region: region.to_string(),
            time,
            treated,
            outcome,
        }
    }

    fn three_region_panel() -> Panel {
        Panel::new(vec![
            record("A", 0.0, true, 10.0),
            record("A", 1.0, true, 15.0),
            record("B", 0.0, false, 9.0),
            record("B", 1.0, false, 12.0),
            record("C", 0.0, false, 11.0),
            record("C", 1.0, false, 14.0),
        ])
        .expect("valid panel")
    }

    #[test]
    fn worked_example() {
        // Treated change 15 − 10 = 5; control change mean([12,14]) − mean([9,11]) = 3.
        let effect = DidEstimator::default().estimate(&three_region_panel()).unwrap();
        assert!((effect - 2.0).abs() < 1e-12);
    }

    #[test]
    fn invariant_under_uniform_period_offset() {
        // Shifting every post-period outcome by a constant moves both group
        // averages equally, so the estimate must not change.
        let offset = 100.0;
        let base = three_region_panel();
        let shifted = Panel::new(
            base.records()
                .iter()
                .map(|r| {
                    let mut r = r.clone();
                    if r.time == 1.0 {
                        r.outcome += offset;
                    }
                    r
                })
                .collect(),
        )
        .unwrap();

        let estimator = DidEstimator::default();
        let original = estimator.estimate(&base).unwrap();
        let offsetted = estimator.estimate(&shifted).unwrap();
        assert!((original - offsetted).abs() < 1e-9);
    }

    #[test]
    fn pools_multiple_treated_regions() {
        let panel = Panel::new(vec![
            record("A", 0.0, true, 10.0),
            record("A", 1.0, true, 15.0),
            record("D", 0.0, true, 20.0),
            record("D", 1.0, true, 23.0),
            record("B", 0.0, false, 9.0),
            record("B", 1.0, false, 12.0),
        ])
        .unwrap();
        // Treated change mean([15,23]) − mean([10,20]) = 4; control change 3.
        let effect = DidEstimator::default().estimate(&panel).unwrap();
        assert!((effect - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_group_is_an_error() {
        // No control observations at all.
        let panel = Panel::new(vec![
            record("A", 0.0, true, 10.0),
            record("A", 1.0, true, 15.0),
        ])
        .unwrap();
        assert!(matches!(
            DidEstimator::default().estimate(&panel),
            Err(EstimatorError::EmptySample)
        ));
    }

    #[test]
    fn custom_time_markers() {
        let panel = Panel::new(vec![
            record("A", 2000.0, true, 10.0),
            record("A", 2010.0, true, 15.0),
            record("B", 2000.0, false, 9.0),
            record("B", 2010.0, false, 12.0),
        ])
        .unwrap();
        let effect = DidEstimator::new(2000.0, 2010.0).estimate(&panel).unwrap();
        assert!((effect - 2.0).abs() < 1e-12);
    }
}
