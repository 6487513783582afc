//! Logging output of a validation run.

use std::io;
use std::sync::{Arc, Mutex};

use catalog_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use catalog_validate::{CatalogValidator, ValidatorOptions};
use tracing::level_filters::LevelFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn validation_events_reach_the_subscriber() {
    let captured = Captured::default();
    let writer = captured.clone();
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_format(LogFormat::Compact)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, move || writer.clone());

    let dir = tempfile::TempDir::new().unwrap();
    let report = CatalogValidator::new(dir.path().join("sumiu.csv"))
        .with_options(ValidatorOptions::new().with_report_file(false))
        .execute();
    assert_eq!(report.summary.total_rows, 0);

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("load failed"), "{output}");
    assert!(output.contains("validation finished"), "{output}");
    assert!(output.contains("validate"), "{output}");
}
