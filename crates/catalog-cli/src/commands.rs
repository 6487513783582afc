use std::fs;

use anyhow::{Context, Result};
use catalog_model::{EXPECTED_COLUMNS, canonical_key, default_for, is_numeric_column};
use catalog_validate::{CatalogValidator, ValidationOutcome, ValidatorOptions};
use comfy_table::Table;
use serde_json::json;
use tracing::info_span;

use crate::cli::{OutputFormatArg, SchemaArgs, ValidateArgs};
use crate::summary::{apply_table_style, print_summary};

/// Exit code for a file without errors.
pub const EXIT_VALID: i32 = 0;
/// Exit code for a file with validation errors.
pub const EXIT_INVALID: i32 = 1;
/// Exit code for usage or internal failures.
pub const EXIT_FAILURE: i32 = 2;

pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    let span = info_span!("command", name = "validate");
    let _guard = span.enter();

    if let Some(dir) = &args.report_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create report directory {}", dir.display()))?;
    }
    let mut options = ValidatorOptions::new().with_report_file(!args.no_report_file);
    if let Some(dir) = &args.report_dir {
        options = options.with_report_dir(dir);
    }

    let stream = args.show_logs && args.format == OutputFormatArg::Table;
    let validator = if stream {
        CatalogValidator::with_sink(&args.file, |line: &str| println!("{line}"))
    } else {
        CatalogValidator::new(&args.file)
    };
    let outcome = validator.with_options(options).run();

    match args.format {
        OutputFormatArg::Table => print_summary(&outcome),
        OutputFormatArg::Json => print_json(&outcome)?,
    }

    Ok(if outcome.report.is_valid() {
        EXIT_VALID
    } else {
        EXIT_INVALID
    })
}

fn print_json(outcome: &ValidationOutcome) -> Result<()> {
    let text = serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    println!("{text}");
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    match args.format {
        OutputFormatArg::Table => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Coluna", "Chave", "Numérica", "Padrão"]);
            apply_table_style(&mut table);
            for (idx, column) in EXPECTED_COLUMNS.iter().enumerate() {
                table.add_row(vec![
                    (idx + 1).to_string(),
                    (*column).to_string(),
                    canonical_key(column),
                    if is_numeric_column(column) { "sim" } else { "-" }.to_string(),
                    default_for(column).map_or_else(|| "-".to_string(), |value| value.to_string()),
                ]);
            }
            println!("{table}");
        }
        OutputFormatArg::Json => {
            let entries: Vec<_> = EXPECTED_COLUMNS
                .iter()
                .map(|column| {
                    json!({
                        "name": column,
                        "key": canonical_key(column),
                        "numeric": is_numeric_column(column),
                        "default": default_for(column),
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&entries).context("serialize schema")?;
            println!("{text}");
        }
    }
    Ok(())
}
