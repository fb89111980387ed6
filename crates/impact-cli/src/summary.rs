use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use impact_cli::types::StudyOutcome;

pub fn print_summary(outcome: &StudyOutcome) {
    println!("Dataset: {}", outcome.dataset.display());
    println!(
        "Panel: {} records across {} regions",
        outcome.record_count, outcome.region_count
    );
    println!("Treated region: {}", outcome.treated_region);

    let mut effects = Table::new();
    effects.set_header(vec![header_cell("Estimate"), header_cell("Value")]);
    apply_table_style(&mut effects);
    align_column(&mut effects, 1, CellAlignment::Right);
    effects.add_row(vec![
        Cell::new("Difference-in-differences effect"),
        value_cell(outcome.did_effect),
    ]);
    effects.add_row(vec![
        Cell::new("Synthetic control effect"),
        value_cell(outcome.synthetic.effect),
    ]);
    effects.add_row(vec![
        Cell::new("Synthetic pre-period outcome"),
        value_cell(outcome.synthetic.synthetic_pre),
    ]);
    effects.add_row(vec![
        Cell::new("Synthetic post-period outcome"),
        value_cell(outcome.synthetic.synthetic_post),
    ]);
    println!("{effects}");

    let mut weights = Table::new();
    weights.set_header(vec![header_cell("Donor region"), header_cell("Weight")]);
    apply_table_style(&mut weights);
    align_column(&mut weights, 1, CellAlignment::Right);
    for (region, weight) in outcome.synthetic.weights.iter() {
        weights.add_row(vec![Cell::new(region), Cell::new(format!("{weight:.6}"))]);
    }
    println!("{weights}");

    match &outcome.reports {
        Some(paths) => println!("Study published to {}", paths.study_report.display()),
        None => println!("Dry run: no files written."),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn status_cell(treated: bool) -> Cell {
    if treated {
        Cell::new("treated")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("control").fg(Color::DarkGrey)
    }
}

fn value_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
