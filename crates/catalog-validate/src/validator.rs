//! Validation orchestrator: load, schema check, field rules, report.

use std::path::{Path, PathBuf};

use catalog_ingest::load;
use catalog_model::{Corrections, Dataset, EXPECTED_COLUMNS, LogSink, Status, Transcript};
use chrono::Local;

use crate::checks;
use crate::finding::Finding;
use crate::report::{Summary, ValidationReport, log_final_report};
use crate::schema_check;
use crate::transcript_file::{render, write_report_file};

/// Options for a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Directory for the report file. `None` means the working directory.
    pub report_dir: Option<PathBuf>,
    /// Whether to write the report file at all.
    pub write_report_file: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            report_dir: None,
            write_report_file: true,
        }
    }
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_report_file(mut self, enabled: bool) -> Self {
        self.write_report_file = enabled;
        self
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub report: ValidationReport,
    pub findings: Vec<Finding>,
    /// Loaded data with the classification-code corrections applied.
    /// `None` when the file could not be loaded.
    pub cleaned: Option<Dataset>,
    /// Where the report file was written, if it was.
    pub report_path: Option<PathBuf>,
}

/// Validates one catalog file.
///
/// A validator owns the transcript of its run and is consumed by
/// [`CatalogValidator::run`]; create a new one per file.
#[derive(Debug)]
pub struct CatalogValidator<'a> {
    path: PathBuf,
    options: ValidatorOptions,
    transcript: Transcript<'a>,
}

impl<'a> CatalogValidator<'a> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: ValidatorOptions::default(),
            transcript: Transcript::new(),
        }
    }

    /// Create a validator that forwards every transcript line to `sink`.
    pub fn with_sink(path: impl Into<PathBuf>, sink: impl LogSink + 'a) -> Self {
        Self {
            path: path.into(),
            options: ValidatorOptions::default(),
            transcript: Transcript::with_sink(sink),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the whole validation. Never fails: load problems become findings.
    pub fn run(self) -> ValidationOutcome {
        let Self {
            path,
            options,
            mut transcript,
        } = self;
        let span = tracing::info_span!("validate", path = %path.display());
        let _guard = span.enter();

        let mut findings = Vec::new();
        let (total_rows, cleaned) = match load(&path, &mut transcript) {
            Ok(dataset) => {
                let corrections = validate_dataset(&dataset, &mut transcript, &mut findings);
                (dataset.height(), Some(dataset.corrected(&corrections)))
            }
            Err(error) => {
                tracing::warn!(%error, "load failed");
                findings.push(Finding::LoadFailed {
                    message: error.to_string(),
                });
                (0, None)
            }
        };

        let now = Local::now();
        let summary = Summary::from_findings(&path, total_rows, &findings, &now);
        let mut report = ValidationReport::new(summary, &findings);
        log_final_report(&report, &mut transcript);

        let report_path = if options.write_report_file {
            let dir = options.report_dir.as_deref().unwrap_or(Path::new("."));
            let contents = render(&path, &report, &now);
            match write_report_file(dir, &contents, &now) {
                Ok(saved) => {
                    transcript.log(
                        Status::Save,
                        format!("Relatório detalhado salvo em: {}", saved.display()),
                    );
                    Some(saved)
                }
                Err(error) => {
                    tracing::warn!(%error, "report file not written");
                    transcript.warning(format!("Relatório detalhado não foi salvo: {error}"));
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(
            rows = report.summary.total_rows,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validation finished"
        );
        report.logs = transcript.into_lines();
        ValidationOutcome {
            report,
            findings,
            cleaned,
            report_path,
        }
    }

    /// Run the validation and keep only the report.
    pub fn execute(self) -> ValidationReport {
        self.run().report
    }
}

/// Schema check, then the field rules when every expected column exists.
fn validate_dataset(
    dataset: &Dataset,
    transcript: &mut Transcript<'_>,
    findings: &mut Vec<Finding>,
) -> Corrections {
    let schema = schema_check::check(dataset, EXPECTED_COLUMNS, transcript);
    findings.extend(schema.findings);
    if !schema.structure_ok {
        tracing::info!("missing columns, skipping field rules");
        return Corrections::new();
    }
    let rules = checks::run_all(dataset, transcript);
    findings.extend(rules.findings);
    rules.corrections
}

/// Validate `path` with default options.
pub fn execute(path: impl AsRef<Path>) -> ValidationReport {
    CatalogValidator::new(path.as_ref()).execute()
}
