use std::path::PathBuf;

use impact_estimator::{SyntheticControlEstimate, TTestResult};
use impact_report::ReportPaths;

/// Outcome of a full study run.
#[derive(Debug)]
pub struct StudyOutcome {
    /// Dataset the study ran over.
    pub dataset: PathBuf,
    /// Treated region the synthetic control was built for.
    pub treated_region: String,
    pub did_effect: f64,
    pub synthetic: SyntheticControlEstimate,
    pub record_count: usize,
    pub region_count: usize,
    /// Written artifacts; `None` on a dry run.
    pub reports: Option<ReportPaths>,
}

/// Outcome of the lightweight `analyze` command.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub did_effect: f64,
    /// Post-period treated-vs-control comparison.
    pub ttest: TTestResult,
}

/// One row of the `regions` listing.
#[derive(Debug)]
pub struct RegionRow {
    pub region: String,
    pub treated: bool,
    pub observations: usize,
}
