use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Non-negative donor weights over control regions.
///
/// Invariant (upheld by the synthetic-control estimator, checked in its
/// tests): weights sum to 1.0 within floating-point tolerance. The map is
/// ordered so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorWeights(BTreeMap<String, f64>);

impl DonorWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: String, weight: f64) {
        self.0.insert(region, weight);
    }

    pub fn get(&self, region: &str) -> Option<f64> {
        self.0.get(region).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(region, weight)| (region.as_str(), *weight))
    }

    /// Sum of all weights (≈ 1.0 for a well-formed vector).
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// The heaviest donor, ties broken by region name order.
    pub fn heaviest(&self) -> Option<(&str, f64)> {
        self.iter()
            .fold(None, |best, (region, weight)| match best {
                Some((_, best_weight)) if best_weight >= weight => best,
                _ => Some((region, weight)),
            })
    }
}

impl FromIterator<(String, f64)> for DonorWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
