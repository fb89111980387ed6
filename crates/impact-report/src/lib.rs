//! Study report generation.
//!
//! Produces the plain-text artifacts of a study run plus a machine-readable
//! sidecar:
//!
//! - `research_design.txt`: fixed design summary
//! - `results.txt`: DiD effect, synthetic-control effect, donor weights
//! - `study_report.txt`: assembled report
//! - `results.json`: serialized estimates with a generation timestamp

mod render;
mod writer;

pub use render::{render_results, render_study_report, research_design_text};
pub use writer::{
    RESEARCH_DESIGN_FILE, RESULTS_FILE, RESULTS_JSON_FILE, STUDY_REPORT_FILE, ReportPaths,
    StudyResults, write_reports,
};
