//! Property tests for the synthetic-control weighting scheme.

use proptest::prelude::*;

use impact_estimator::SyntheticControlEstimator;
use impact_model::{Panel, PanelRecord};

fn record(region: String, time: f64, treated: bool, outcome: f64) -> PanelRecord {
    PanelRecord {
        region,
        time,
        treated,
        outcome,
    }
}

/// Donor outcomes within a plausible magnitude; extreme exponents would only
/// probe float overflow, not the weighting scheme.
fn outcome() -> impl Strategy<Value = f64> {
    -1e6..1e6f64
}

fn donor_pool() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((outcome(), outcome()), 1..12)
}

proptest! {
    #[test]
    fn weights_form_a_probability_simplex(
        treated_pre in outcome(),
        treated_post in outcome(),
        donors in donor_pool(),
    ) {
        let mut records = vec![
            record("treated".to_string(), 0.0, true, treated_pre),
            record("treated".to_string(), 1.0, true, treated_post),
        ];
        for (index, (pre, post)) in donors.iter().enumerate() {
            let region = format!("donor-{index:02}");
            records.push(record(region.clone(), 0.0, false, *pre));
            records.push(record(region, 1.0, false, *post));
        }
        let panel = Panel::new(records).unwrap();

        let estimate = SyntheticControlEstimator::default()
            .estimate(&panel, "treated")
            .unwrap();

        prop_assert_eq!(estimate.weights.len(), donors.len());
        for (_, weight) in estimate.weights.iter() {
            prop_assert!(weight >= 0.0);
        }
        prop_assert!((estimate.weights.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exact_match_dominates_distant_donors(
        treated_pre in outcome(),
        gap in 1.0..1e4f64,
    ) {
        let panel = Panel::new(vec![
            record("treated".to_string(), 0.0, true, treated_pre),
            record("treated".to_string(), 1.0, true, treated_pre + 1.0),
            record("match".to_string(), 0.0, false, treated_pre),
            record("match".to_string(), 1.0, false, treated_pre),
            record("far".to_string(), 0.0, false, treated_pre + gap),
            record("far".to_string(), 1.0, false, treated_pre + gap),
        ])
        .unwrap();

        let estimate = SyntheticControlEstimator::default()
            .estimate(&panel, "treated")
            .unwrap();

        let (heaviest, _) = estimate.weights.heaviest().unwrap();
        prop_assert_eq!(heaviest, "match");
        prop_assert!(
            estimate.weights.get("match").unwrap() > estimate.weights.get("far").unwrap()
        );
    }
}
