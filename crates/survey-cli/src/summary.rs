use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use survey_cli::pipeline::ValidationRun;
use survey_model::{Issue, IssueKind, ValidationReport, ValidationResult};

/// Row lists longer than this are shortened in the issue table.
const MAX_LISTED_ROWS: usize = 8;

pub fn print_summary(run: &ValidationRun) {
    println!("Input: {}", run.input.display());
    let report = match &run.result {
        ValidationResult::Ok(report) => report,
        ValidationResult::Error { message } => {
            eprintln!("Error: {message}");
            return;
        }
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Issues"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.row_count),
        count_cell(report.coordinates.len(), Color::Green),
        count_cell(report.rejected_count(), Color::Red),
        count_cell(report.issues.len(), Color::Red),
    ]);
    println!("{table}");
    print_issue_table(report);
}

fn print_issue_table(report: &ValidationReport) {
    if report.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tipo"),
        header_cell("Lote"),
        header_cell("Línea"),
        header_cell("Palma"),
        header_cell("Cantidad"),
        header_cell("Filas"),
        header_cell("Descripción"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            kind_cell(issue.kind()),
            optional_cell(issue.lot()),
            optional_cell(issue.line()),
            optional_cell(issue.position()),
            Cell::new(issue.count()),
            Cell::new(format_rows(issue)),
            Cell::new(issue.description()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");

    let counts = report.issue_counts();
    let totals: Vec<String> = counts
        .iter()
        .map(|(kind, count)| format!("{}: {count}", kind.label()))
        .collect();
    println!("{}", totals.join(", "));
}

fn format_rows(issue: &Issue) -> String {
    let rows = issue.rows();
    let listed: Vec<String> = rows
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(ToString::to_string)
        .collect();
    let mut text = listed.join(", ");
    if rows.len() > MAX_LISTED_ROWS {
        text.push_str(&format!(" (+{} more)", rows.len() - MAX_LISTED_ROWS));
    }
    text
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: IssueKind) -> Cell {
    let cell = Cell::new(kind.code());
    if kind.is_row_level() {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
