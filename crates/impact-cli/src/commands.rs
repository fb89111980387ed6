use anyhow::Result;
use comfy_table::{Cell, Table};

use impact_cli::pipeline::{StudyConfig, list_regions, run_analysis, run_study};
use impact_cli::types::StudyOutcome;

use crate::cli::{AnalyzeArgs, RegionsArgs, StudyArgs};
use crate::summary::{apply_table_style, header_cell, status_cell};

pub fn run_study_command(args: &StudyArgs) -> Result<StudyOutcome> {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.dataset
            .parent()
            .map(|parent| parent.join("output"))
            .unwrap_or_else(|| "output".into())
    });
    run_study(&StudyConfig {
        dataset: &args.dataset,
        output_dir: &output_dir,
        pre: args.pre,
        post: args.post,
        treated_region: args.treated_region.as_deref(),
        dry_run: args.dry_run,
    })
}

pub fn run_analyze_command(args: &AnalyzeArgs) -> Result<()> {
    let outcome = run_analysis(&args.dataset, args.pre, args.post)?;
    println!("Difference-in-differences effect: {:.2}", outcome.did_effect);
    println!(
        "Post-period t-test: t={:.3}, p={:.3}",
        outcome.ttest.statistic, outcome.ttest.p_value
    );
    Ok(())
}

pub fn run_regions_command(args: &RegionsArgs) -> Result<()> {
    let rows = list_regions(&args.dataset)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Group"),
        header_cell("Observations"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.region),
            status_cell(row.treated),
            Cell::new(row.observations),
        ]);
    }
    println!("{table}");
    Ok(())
}
