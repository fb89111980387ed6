//! Study artifact writing.
//!
//! All files land in one output directory. Nothing is written unless every
//! estimate is already in hand, so a failed estimator never leaves a partial
//! report behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use impact_estimator::SyntheticControlEstimate;

use crate::render::{render_results, render_study_report, research_design_text};

pub const RESEARCH_DESIGN_FILE: &str = "research_design.txt";
pub const RESULTS_FILE: &str = "results.txt";
pub const STUDY_REPORT_FILE: &str = "study_report.txt";
pub const RESULTS_JSON_FILE: &str = "results.json";

/// Completed estimates for one study run.
#[derive(Debug, Clone)]
pub struct StudyResults {
    pub treated_region: String,
    pub did_effect: f64,
    pub synthetic: SyntheticControlEstimate,
}

/// Paths of the written artifacts.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub research_design: PathBuf,
    pub results: PathBuf,
    pub study_report: PathBuf,
    pub results_json: PathBuf,
}

#[derive(Serialize)]
struct ResultsJson<'a> {
    generated: String,
    treated_region: &'a str,
    did_effect: f64,
    synthetic: &'a SyntheticControlEstimate,
}

/// Write the research design, results, study report, and JSON sidecar.
pub fn write_reports(output_dir: &Path, results: &StudyResults) -> Result<ReportPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let design = research_design_text();
    let results_text = render_results(&results.treated_region, results.did_effect, &results.synthetic);
    let report_text = render_study_report(design, &results_text);

    let paths = ReportPaths {
        research_design: output_dir.join(RESEARCH_DESIGN_FILE),
        results: output_dir.join(RESULTS_FILE),
        study_report: output_dir.join(STUDY_REPORT_FILE),
        results_json: output_dir.join(RESULTS_JSON_FILE),
    };

    write_text(&paths.research_design, design)?;
    write_text(&paths.results, &results_text)?;
    write_text(&paths.study_report, &report_text)?;

    let sidecar = ResultsJson {
        generated: Utc::now().to_rfc3339(),
        treated_region: &results.treated_region,
        did_effect: results.did_effect,
        synthetic: &results.synthetic,
    };
    let json = serde_json::to_string_pretty(&sidecar).context("serialize results")?;
    write_text(&paths.results_json, &json)?;

    info!(
        output_dir = %output_dir.display(),
        treated_region = %results.treated_region,
        "study report written"
    );
    Ok(paths)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_model::DonorWeights;

    fn results() -> StudyResults {
        StudyResults {
            treated_region: "A".to_string(),
            did_effect: 2.0,
            synthetic: SyntheticControlEstimate {
                effect: 2.0,
                synthetic_pre: 10.0,
                synthetic_post: 13.0,
                weights: [("B".to_string(), 0.5), ("C".to_string(), 0.5)]
                    .into_iter()
                    .collect::<DonorWeights>(),
            },
        }
    }

    #[test]
    fn writes_all_four_artifacts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let paths = write_reports(dir.path(), &results()).expect("write reports");

        for path in [
            &paths.research_design,
            &paths.results,
            &paths.study_report,
            &paths.results_json,
        ] {
            assert!(path.exists(), "missing artifact {}", path.display());
        }

        let report = fs::read_to_string(&paths.study_report).unwrap();
        assert!(report.contains("=== Results ==="));
        assert!(report.contains("Synthetic control effect for A: 2.00"));
    }

    #[test]
    fn json_sidecar_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let paths = write_reports(dir.path(), &results()).expect("write reports");

        let raw = fs::read_to_string(&paths.results_json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["treated_region"], "A");
        assert_eq!(value["did_effect"], 2.0);
        assert_eq!(value["synthetic"]["weights"]["B"], 0.5);
        assert!(value["generated"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn creates_nested_output_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("studies").join("run-1");
        write_reports(&nested, &results()).expect("write reports");
        assert!(nested.join(STUDY_REPORT_FILE).exists());
    }
}
