use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fauna_cli::pipeline::CleanReport;
use fauna_model::{ColumnMapping, ColumnRole, MatchKind};

pub fn print_summary(report: &CleanReport) {
    println!("Input: {}", report.input.display());
    print_mapping(&report.mapping, &ColumnRole::ALL);

    let counts = &report.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(counts.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped (missing value)"),
        drop_cell(counts.dropped_missing),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (unparseable speed)"),
        drop_cell(counts.dropped_speed),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (unrecognized diet)"),
        drop_cell(counts.dropped_diet),
    ]);
    table.add_row(vec![
        Cell::new("Output")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if report.dry_run {
        println!("Dry run: no files written. Would write:");
    } else {
        println!("Wrote:");
    }
    for path in &report.outputs {
        println!("  {}", path.display());
    }
}

pub fn print_mapping(mapping: &ColumnMapping, roles: &[ColumnRole]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for role in roles {
        let column = mapping.get(*role);
        table.add_row(vec![
            Cell::new(role.as_str()),
            Cell::new(column.index),
            Cell::new(&column.header),
            match_cell(column.kind),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn match_cell(kind: MatchKind) -> Cell {
    let cell = Cell::new(kind.as_str());
    match kind {
        MatchKind::Exact => cell.fg(Color::Green),
        MatchKind::Substring => cell,
        MatchKind::Positional => cell.fg(Color::Yellow),
    }
}

fn drop_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).add_attribute(Attribute::Dim)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}
