use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use catalog_validate::{Finding, Severity, ValidationOutcome};

pub fn print_summary(outcome: &ValidationOutcome) {
    let report = &outcome.report;
    let summary = &report.summary;
    println!("Arquivo: {}", summary.file_name);
    if let Some(path) = &outcome.report_path {
        println!("Relatório: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Linhas"),
        header_cell("Válidas"),
        header_cell("Inválidas"),
        header_cell("% válido"),
        header_cell("Erros"),
        header_cell("Avisos"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_rows).add_attribute(Attribute::Bold),
        Cell::new(summary.valid_rows).fg(Color::Green),
        count_cell(summary.invalid_rows, Color::Red),
        Cell::new(format!("{:.2}", summary.valid_percent)),
        count_cell(report.error_count(), Color::Red),
        count_cell(report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");
    print_finding_table(&outcome.findings);

    if report.is_valid() {
        println!("{}", status_line(true));
    } else {
        eprintln!("{}", status_line(false));
    }
}

fn print_finding_table(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    // Errors first, rule order kept within a severity.
    ordered.sort_by_key(|finding| severity_rank(finding.severity()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severidade"),
        header_cell("Coluna"),
        header_cell("Qtd"),
        header_cell("Mensagem"),
    ]);
    apply_finding_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for finding in ordered {
        table.add_row(vec![
            severity_cell(finding.severity()),
            Cell::new(finding.column().unwrap_or("-")),
            finding
                .count()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(finding.message()),
        ]);
    }
    println!();
    println!("Ocorrências:");
    println!("{table}");
}

fn status_line(valid: bool) -> &'static str {
    if valid {
        "🎉 ARQUIVO VÁLIDO"
    } else {
        "❌ ARQUIVO COM PROBLEMAS"
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new(severity.label().to_uppercase())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new(severity.label().to_uppercase()).fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
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
