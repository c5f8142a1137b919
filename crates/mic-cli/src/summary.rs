use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mic_cli::report::{NormalizeOutcome, ValidationReport};
use mic_core::diagnostic::quoted_list;
use mic_core::{Mic, format_numeric, to_number};

pub fn print_validation(report: &ValidationReport) {
    println!("File: {}", report.source.display());
    if let Some(path) = &report.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Values"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Invalid %"),
        header_cell("Min"),
        header_cell("Median"),
        header_cell("Max"),
        header_cell("MIC50"),
        header_cell("MIC90"),
        header_cell("Invalid inputs"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.values),
            Cell::new(column.valid),
            count_cell(column.invalid, Color::Red),
            percentage_cell(column.invalid_percentage),
            number_cell(column.min),
            number_cell(column.median),
            number_cell(column.max),
            mic_cell(column.mic50),
            mic_cell(column.mic90),
            inputs_cell(&column.invalid_inputs),
        ]);
    }
    println!("{table}");
    println!(
        "{} rows, {} invalid value(s)",
        report.rows,
        report.total_invalid()
    );
}

pub fn print_normalization(outcomes: &[NormalizeOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Normalized"),
        header_cell("MIC"),
        header_cell("Value"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    for outcome in outcomes {
        let result = if outcome.mic.is_some() {
            Cell::new(outcome.note).fg(Color::Green)
        } else {
            Cell::new(outcome.note).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(format!("{:?}", outcome.raw)),
            outcome
                .candidate
                .as_ref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            mic_cell(outcome.mic),
            number_cell(outcome.mic.and_then(|mic| to_number(mic.as_str()))),
            result,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_width(160);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn percentage_cell(percentage: u32) -> Cell {
    let text = format!("{percentage}%");
    if percentage > 0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        dim_cell(text)
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    value.map_or_else(|| dim_cell("-"), |value| Cell::new(format_numeric(value)))
}

fn mic_cell(value: Option<Mic>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn inputs_cell(inputs: &[String]) -> Cell {
    if inputs.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(quoted_list(inputs)).fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
