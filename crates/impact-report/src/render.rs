//! Plain-text rendering of study artifacts.
//!
//! Pure string builders; file placement lives in [`crate::writer`].

use impact_estimator::SyntheticControlEstimate;

/// Fixed research-design summary written alongside every study.
pub fn research_design_text() -> &'static str {
    "This automated study uses a synthetic control approach to estimate the \
     effect of treatment in a panel dataset. The unit of analysis is 'region' \
     and observations cover a pre-treatment and a post-treatment period. The \
     first treated region (by name order) is compared against a weighted \
     combination of control regions."
}

/// Results body: DiD effect, synthetic-control effect, donor weights.
///
/// Effects print with 2 decimals; weights with 6, as `region=weight` pairs.
pub fn render_results(
    treated_region: &str,
    did_effect: f64,
    estimate: &SyntheticControlEstimate,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Difference-in-differences effect: {did_effect:.2}\n"
    ));
    out.push_str(&format!(
        "Synthetic control effect for {treated_region}: {:.2}\n",
        estimate.effect
    ));
    let weights = estimate
        .weights
        .iter()
        .map(|(region, weight)| format!("{region}={weight:.6}"))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Synthetic control weights: {weights}\n"));
    out
}

/// Full study report assembled from the design and results sections.
pub fn render_study_report(design: &str, results: &str) -> String {
    format!(
        "=== Research Design ===\n{design}\n\n=== Results ===\n{results}\nThis report was generated automatically.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_model::DonorWeights;

    fn estimate() -> SyntheticControlEstimate {
        SyntheticControlEstimate {
            effect: 2.0,
            synthetic_pre: 10.0,
            synthetic_post: 13.0,
            weights: [("B".to_string(), 0.5), ("C".to_string(), 0.5)]
                .into_iter()
                .collect::<DonorWeights>(),
        }
    }

    #[test]
    fn results_body() {
        let rendered = render_results("A", 2.0, &estimate());
        insta::assert_snapshot!(rendered, @r"
        Difference-in-differences effect: 2.00
        Synthetic control effect for A: 2.00
        Synthetic control weights: B=0.500000, C=0.500000
        ");
    }

    #[test]
    fn effects_round_to_two_decimals() {
        let mut est = estimate();
        est.effect = 1.23456;
        let rendered = render_results("A", -0.005, &est);
        assert!(rendered.contains("Difference-in-differences effect: -0.01\n"));
        assert!(rendered.contains("Synthetic control effect for A: 1.23\n"));
    }

    #[test]
    fn weights_render_in_region_order() {
        let rendered = render_results("A", 0.0, &estimate());
        let weights_line = rendered
            .lines()
            .find(|line| line.starts_with("Synthetic control weights:"))
            .unwrap();
        assert!(weights_line.find("B=").unwrap() < weights_line.find("C=").unwrap());
    }

    #[test]
    fn study_report_assembles_sections() {
        let results = render_results("A", 2.0, &estimate());
        let report = render_study_report(research_design_text(), &results);
        assert!(report.starts_with("=== Research Design ===\n"));
        assert!(report.contains("\n\n=== Results ===\n"));
        assert!(report.ends_with("This report was generated automatically.\n"));
    }
}
