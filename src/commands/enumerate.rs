use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::Config;
use crate::enumerator::Enumerator;
use crate::error::AppError;
use crate::model::{ItemType, Report};
use crate::runner::ConsoleRunner;
use crate::utils::{display_path, format_bytes, is_stdout};

pub struct EnumerateOptions {
    pub item_types: Vec<ItemType>,
    /// Overrides the configured report location.
    pub output: Option<PathBuf>,
    pub parallel: bool,
}

pub fn execute_enumerate(options: EnumerateOptions) -> Result<Report, AppError> {
    let config = Config::load()?;
    let output = options.output.unwrap_or_else(|| config.output.clone());
    let runner = ConsoleRunner::from_config(&config);
    let enumerator = Enumerator::new(runner, config)?.with_progress(progress_bar());

    info!("Starting Metasploit module enumeration...");
    let report = enumerator.enumerate(&options.item_types, options.parallel);

    let document = serde_json::to_string_pretty(&report)?;
    write_document(&output, &document)?;
    print_summary(&report, &output, document.len());
    Ok(report)
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}") {
        bar.set_style(style);
    }
    bar
}

fn write_document(path: &Path, document: &str) -> Result<(), AppError> {
    if is_stdout(path) {
        println!("{document}");
        return Ok(());
    }

    info!("Writing results to {}...", display_path(path));
    let write = || {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, document)
    };
    write().map_err(|source| AppError::ReportWrite { path: path.to_path_buf(), source })
}

fn print_summary(report: &Report, path: &Path, size: usize) {
    let destination = if is_stdout(path) { "stdout".to_string() } else { display_path(path) };
    eprintln!(
        "Successfully wrote {} modules to {} ({})",
        report.metadata.total_modules,
        destination,
        format_bytes(size as u64)
    );
    eprintln!("Modules by type:");
    for (item_type, count) in &report.metadata.by_type {
        eprintln!("  - {:<10} {}", item_type, count);
    }
}
