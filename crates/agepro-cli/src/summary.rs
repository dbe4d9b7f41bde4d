use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    print!("{}", render_summary(result));
}

pub fn render_summary(result: &ConvertResult) -> String {
    let summary = &result.summary;
    let mut out = String::new();
    if result.written {
        let _ = writeln!(
            out,
            "Processed {} records into {}",
            summary.total,
            result.output.display()
        );
    } else {
        let _ = writeln!(
            out,
            "Parsed {} records (dry run, {} not written)",
            summary.total,
            result.output.display()
        );
    }

    let mut files = Table::new();
    files.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Records"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut files);
    for column in 1..=3 {
        align_column(&mut files, column, CellAlignment::Right);
    }
    for stats in &result.files {
        files.add_row(vec![
            Cell::new(stats.path.display()),
            Cell::new(stats.rows),
            Cell::new(stats.accepted),
            skipped_cell(stats.skipped),
        ]);
    }
    let _ = writeln!(out, "{files}");

    let mut catalog = Table::new();
    catalog.set_header(vec![
        header_cell("Field"),
        header_cell("Distinct"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut catalog);
    align_column(&mut catalog, 1, CellAlignment::Right);
    for (label, values) in summary.fields() {
        let joined = values
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        catalog.add_row(vec![
            Cell::new(label).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(values.len()),
            Cell::new(joined),
        ]);
    }
    let _ = writeln!(out, "{catalog}");
    let _ = writeln!(out, "Total size: {}", format_total_size(summary.total_size_mb));
    out
}

/// Formats a megabyte total the way the archive page shows it.
pub fn format_total_size(mb: f64) -> String {
    if mb >= 1000.0 {
        format!("{:.1} GB", mb / 1000.0)
    } else {
        format!("{mb:.1} MB")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
