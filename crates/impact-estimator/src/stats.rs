//! Statistical primitives shared by the estimators.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Two-sample test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// Pooled-variance t-statistic.
    pub statistic: f64,
    /// Two-sided p-value in `[0, 1]`.
    pub p_value: f64,
}

/// Sample mean. Errors on an empty sample.
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(EstimatorError::EmptySample);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Unbiased sample variance (n − 1 denominator). Needs at least 2 observations.
pub fn sample_variance(samples: &[f64]) -> Result<f64> {
    let n = samples.len();
    if n < 2 {
        return Err(EstimatorError::InsufficientObservations { count: n });
    }
    let m = mean(samples)?;
    let sum_sq: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Standard normal CDF.
///
/// Uses erfc for better numerical behavior in the tails:
/// Φ(x) = 0.5 · erfc(−x / √2)
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * statrs::function::erf::erfc(-x / std::f64::consts::SQRT_2)
}

/// Pooled-variance two-sample t-test with a two-sided p-value.
///
/// The p-value is the normal approximation 2·(1 − Φ(|t|)) rather than the
/// exact Student-t tail — adequate here and kept from the reference method;
/// it understates p for very small samples.
///
/// Each sample needs at least 2 observations (which also guarantees positive
/// degrees of freedom for the pooled variance).
pub fn independent_ttest(sample1: &[f64], sample2: &[f64]) -> Result<TTestResult> {
    let n1 = sample1.len();
    let n2 = sample2.len();
    let var1 = sample_variance(sample1)?;
    let var2 = sample_variance(sample2)?;

    let pooled_var = ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / (n1 + n2 - 2) as f64;
    let standard_error = (pooled_var * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();
    let statistic = (mean(sample1)? - mean(sample2)?) / standard_error;
    let p_value = 2.0 * (1.0 - normal_cdf(statistic.abs()));

    Ok(TTestResult { statistic, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[9.0, 11.0]).unwrap(), 10.0);
    }

    #[test]
    fn mean_rejects_empty_sample() {
        assert!(matches!(mean(&[]), Err(EstimatorError::EmptySample)));
    }

    #[test]
    fn variance_is_unbiased() {
        // Known value: var([2, 4, 6]) = 4 with the n−1 denominator.
        assert!((sample_variance(&[2.0, 4.0, 6.0]).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn variance_needs_two_observations() {
        assert!(matches!(
            sample_variance(&[1.0]),
            Err(EstimatorError::InsufficientObservations { count: 1 })
        ));
    }

    #[test]
    fn normal_cdf_reference_points() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((normal_cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!((normal_cdf(-1.959964) - 0.025).abs() < 1e-6);
        assert!(normal_cdf(8.0) > 0.999999);
    }

    #[test]
    fn ttest_identical_means_gives_p_one() {
        let result = independent_ttest(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ttest_large_separation_drives_p_toward_zero() {
        let result =
            independent_ttest(&[100.0, 100.1, 99.9], &[1.0, 1.1, 0.9]).unwrap();
        assert!(result.statistic > 100.0);
        assert!(result.p_value < 1e-12);
    }

    #[test]
    fn ttest_worked_example() {
        // a = [2,4,6], b = [1,3,5]: both variances 4, pooled variance 4,
        // se = sqrt(4·(1/3 + 1/3)), t = 1/se.
        let result = independent_ttest(&[2.0, 4.0, 6.0], &[1.0, 3.0, 5.0]).unwrap();
        let expected_t = 1.0 / (8.0_f64 / 3.0).sqrt();
        assert!((result.statistic - expected_t).abs() < 1e-12);
        assert!(result.p_value > 0.53 && result.p_value < 0.55);
    }

    #[test]
    fn ttest_needs_two_observations_per_sample() {
        assert!(matches!(
            independent_ttest(&[1.0], &[1.0, 2.0]),
            Err(EstimatorError::InsufficientObservations { count: 1 })
        ));
        assert!(matches!(
            independent_ttest(&[1.0, 2.0], &[]),
            Err(EstimatorError::InsufficientObservations { count: 0 })
        ));
    }

    #[test]
    fn ttest_sign_follows_first_sample() {
        let above = independent_ttest(&[5.0, 6.0, 7.0], &[1.0, 2.0, 3.0]).unwrap();
        let below = independent_ttest(&[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0]).unwrap();
        assert!(above.statistic > 0.0);
        assert!(below.statistic < 0.0);
        assert!((above.p_value - below.p_value).abs() < 1e-12);
    }
}
