//! Synthetic-control estimation with inverse-distance donor weighting.
//!
//! This is deliberately not the canonical constrained-optimization synthetic
//! control method: donor weights come from a single-predictor closeness score
//! on pre-period outcomes, normalized over the donor pool. The estimate then
//! applies a DiD-style correction for any remaining pre-period gap between
//! the treated unit and its synthetic counterpart.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use impact_model::{DonorWeights, Panel};

use crate::error::{EstimatorError, Period, Result};

/// Guards the inverse distance against division by zero when a donor's
/// pre-period outcome exactly matches the treated unit's.
const DISTANCE_EPSILON: f64 = 1e-6;

/// Synthetic-control output for one treated region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticControlEstimate {
    /// Treatment effect after the pre-period gap correction.
    pub effect: f64,
    /// Weighted donor outcome in the pre period.
    pub synthetic_pre: f64,
    /// Weighted donor outcome in the post period.
    pub synthetic_post: f64,
    /// Normalized donor weights (non-negative, sum to 1).
    pub weights: DonorWeights,
}

/// Two-period synthetic-control estimator.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticControlEstimator {
    /// Pre-treatment time marker.
    pub pre: f64,
    /// Post-treatment time marker.
    pub post: f64,
}

impl SyntheticControlEstimator {
    pub fn new(pre: f64, post: f64) -> Self {
        Self { pre, post }
    }

    /// Estimate the effect of treatment on `treated_region`.
    ///
    /// Every other region with a pre-period observation joins the donor
    /// pool. Errors when the treated region misses either period, when a
    /// donor misses its post-period observation, or when the pool is empty.
    pub fn estimate(
        &self,
        panel: &Panel,
        treated_region: &str,
    ) -> Result<SyntheticControlEstimate> {
        let start = Instant::now();
        let pre_outcomes = panel.outcomes_by_region(self.pre);
        let post_outcomes = panel.outcomes_by_region(self.post);

        let treated_pre = lookup(&pre_outcomes, treated_region, Period::Pre)?;
        let treated_post = lookup(&post_outcomes, treated_region, Period::Post)?;

        let donors: Vec<&str> = pre_outcomes
            .keys()
            .copied()
            .filter(|region| *region != treated_region)
            .collect();
        if donors.is_empty() {
            return Err(EstimatorError::NoControlRegions);
        }

        let weights = closeness_weights(treated_pre, &donors, &pre_outcomes);

        let mut synthetic_pre = 0.0;
        let mut synthetic_post = 0.0;
        for (region, weight) in weights.iter() {
            synthetic_pre += weight * pre_outcomes[region];
            synthetic_post += weight * lookup(&post_outcomes, region, Period::Post)?;
        }

        let effect = (treated_post - synthetic_post) - (treated_pre - synthetic_pre);
        debug!(
            treated_region,
            donor_count = weights.len(),
            effect,
            duration_ms = start.elapsed().as_millis(),
            "synthetic control estimated"
        );

        Ok(SyntheticControlEstimate {
            effect,
            synthetic_pre,
            synthetic_post,
            weights,
        })
    }
}

impl Default for SyntheticControlEstimator {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

fn lookup(outcomes: &BTreeMap<&str, f64>, region: &str, period: Period) -> Result<f64> {
    outcomes
        .get(region)
        .copied()
        .ok_or_else(|| EstimatorError::RegionNotFound {
            region: region.to_string(),
            period,
        })
}

/// Normalized inverse-distance weights favoring donors close to `target`.
///
/// By construction every weight is positive and the vector sums to 1 over a
/// non-empty donor list.
fn closeness_weights(
    target: f64,
    donors: &[&str],
    pre_outcomes: &BTreeMap<&str, f64>,
) -> DonorWeights {
    let inverses: Vec<f64> = donors
        .iter()
        .map(|region| 1.0 / ((target - pre_outcomes[region]).abs() + DISTANCE_EPSILON))
        .collect();
    let total: f64 = inverses.iter().sum();
    donors
        .iter()
        .zip(inverses)
        .map(|(region, inverse)| ((*region).to_string(), inverse / total))
        .collect()
}
