use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use claim_cli::pipeline::RunResult;
use claim_ingest::{ColumnKind, DatasetProfile};

pub fn print_run_summary(result: &RunResult) {
    match &result.output {
        Some(path) => println!("Output: {} ({} bytes)", path.display(), result.bytes),
        None => println!("Output: not written (dry run)"),
    }
    if let Some(path) = &result.summary_json {
        println!("Report: {}", path.display());
    }
    println!("Envelopes: {}", result.envelopes);
    print_stage_counts(result);
    print_aggregation(result);
}

pub fn print_profile(profile: &DatasetProfile) {
    println!("Rows: {}", profile.row_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Non-null"),
        header_cell("Null"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 2..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &profile.columns {
        let summary = column.summary;
        table.add_row(vec![
            Cell::new(&column.name),
            kind_cell(column.kind),
            Cell::new(column.non_null),
            null_cell(column.null_count),
            stat_cell(summary.and_then(|s| s.mean)),
            stat_cell(summary.and_then(|s| s.std)),
            stat_cell(summary.and_then(|s| s.min)),
            stat_cell(summary.and_then(|s| s.max)),
        ]);
    }
    println!("{table}");
}

fn print_stage_counts(result: &RunResult) {
    let counts = result.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Parsed"), Cell::new(counts.input)]);
    table.add_row(vec![
        Cell::new("Dropped (charge <= 0)"),
        null_cell(counts.filtered_out),
    ]);
    table.add_row(vec![Cell::new("Mapped names"), Cell::new(counts.mapped)]);
    table.add_row(vec![Cell::new("Synthesized names"), Cell::new(counts.masked)]);
    table.add_row(vec![
        Cell::new("Encoded").add_attribute(Attribute::Bold),
        Cell::new(counts.output).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_aggregation(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Provider"),
        header_cell("Claims"),
        header_cell("Total charge"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_claims = 0usize;
    for (provider, total) in result.report.iter() {
        total_claims += total.claim_count;
        table.add_row(vec![
            Cell::new(provider),
            Cell::new(total.claim_count),
            Cell::new(total.total_charge),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_claims).add_attribute(Attribute::Bold),
        Cell::new(result.report.grand_total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Numeric => Cell::new(kind.as_str()).fg(Color::Green),
        ColumnKind::Text => Cell::new(kind.as_str()),
    }
}

fn null_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
