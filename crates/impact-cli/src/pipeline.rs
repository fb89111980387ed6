//! Study pipeline with explicit stages.
//!
//! 1. **Ingest**: read the CSV dataset into a typed panel
//! 2. **Select**: pick the treated region (explicit flag or first by name)
//! 3. **Estimate**: difference-in-differences + synthetic control
//! 4. **Output**: write the report artifacts
//!
//! Any stage failure aborts the run before the output stage touches disk, so
//! a failed estimator never produces a partial report.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use impact_estimator::{DidEstimator, SyntheticControlEstimator, independent_ttest};
use impact_ingest::read_panel;
use impact_model::Panel;
use impact_report::{StudyResults, write_reports};

use crate::types::{AnalysisOutcome, RegionRow, StudyOutcome};

/// Parameters of a full study run.
#[derive(Debug, Clone)]
pub struct StudyConfig<'a> {
    pub dataset: &'a Path,
    pub output_dir: &'a Path,
    /// Pre-treatment time marker.
    pub pre: f64,
    /// Post-treatment time marker.
    pub post: f64,
    /// Treated region override; when absent, the lexicographically first
    /// region with a treated post-period observation is used.
    pub treated_region: Option<&'a str>,
    /// Estimate without writing any artifact.
    pub dry_run: bool,
}

/// Run the full pipeline: ingest → select → estimate → output.
pub fn run_study(config: &StudyConfig<'_>) -> Result<StudyOutcome> {
    let study_span = info_span!("study", dataset = %config.dataset.display());
    let _study_guard = study_span.enter();

    let panel = ingest(config.dataset)?;
    let treated_region = select_treated_region(&panel, config.treated_region, config.post)?;

    let estimate_span = info_span!("estimate", treated_region = %treated_region);
    let estimate_start = Instant::now();
    let (did_effect, synthetic) = estimate_span.in_scope(|| -> Result<_> {
        let did_effect = DidEstimator::new(config.pre, config.post)
            .estimate(&panel)
            .context("difference-in-differences")?;
        let synthetic = SyntheticControlEstimator::new(config.pre, config.post)
            .estimate(&panel, &treated_region)
            .with_context(|| format!("synthetic control for {treated_region}"))?;
        Ok((did_effect, synthetic))
    })?;
    info!(
        treated_region = %treated_region,
        did_effect,
        synthetic_effect = synthetic.effect,
        donor_count = synthetic.weights.len(),
        duration_ms = estimate_start.elapsed().as_millis(),
        "estimation complete"
    );

    let reports = if config.dry_run {
        info!("output skipped (dry run)");
        None
    } else {
        let output_span = info_span!("output", output_dir = %config.output_dir.display());
        let results = StudyResults {
            treated_region: treated_region.clone(),
            did_effect,
            synthetic: synthetic.clone(),
        };
        Some(output_span.in_scope(|| write_reports(config.output_dir, &results))?)
    };

    Ok(StudyOutcome {
        dataset: config.dataset.to_path_buf(),
        treated_region,
        did_effect,
        region_count: panel.regions().len(),
        record_count: panel.len(),
        synthetic,
        reports,
    })
}

/// Run the lightweight analysis: DiD effect plus a post-period two-sample
/// t-test of treated vs control outcomes.
pub fn run_analysis(dataset: &Path, pre: f64, post: f64) -> Result<AnalysisOutcome> {
    let panel = ingest(dataset)?;

    let did_effect = DidEstimator::new(pre, post)
        .estimate(&panel)
        .context("difference-in-differences")?;
    let ttest = independent_ttest(&panel.outcomes(true, post), &panel.outcomes(false, post))
        .context("post-period t-test")?;

    Ok(AnalysisOutcome { did_effect, ttest })
}

/// Summarize the regions of a dataset.
pub fn list_regions(dataset: &Path) -> Result<Vec<RegionRow>> {
    let panel = ingest(dataset)?;

    let mut rows: BTreeMap<&str, RegionRow> = BTreeMap::new();
    for record in panel.records() {
        let row = rows
            .entry(record.region.as_str())
            .or_insert_with(|| RegionRow {
                region: record.region.clone(),
                treated: false,
                observations: 0,
            });
        row.treated |= record.treated;
        row.observations += 1;
    }
    Ok(rows.into_values().collect())
}

fn ingest(dataset: &Path) -> Result<Panel> {
    let ingest_span = info_span!("ingest", dataset = %dataset.display());
    let ingest_start = Instant::now();
    let panel = ingest_span
        .in_scope(|| read_panel(dataset))
        .with_context(|| format!("load dataset {}", dataset.display()))?;
    info!(
        dataset = %dataset.display(),
        record_count = panel.len(),
        region_count = panel.regions().len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(panel)
}

fn select_treated_region(
    panel: &Panel,
    override_region: Option<&str>,
    post: f64,
) -> Result<String> {
    if let Some(region) = override_region {
        if !panel.regions().contains(region) {
            return Err(anyhow!("region '{region}' not present in the dataset"));
        }
        return Ok(region.to_string());
    }
    panel
        .treated_regions_at(post)
        .into_iter()
        .next()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no treated region found in the dataset"))
}
