use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use webpify::cli::Cli;
use webpify::io::collect_files;
use webpify::report::{FileResult, Report};
use webpify_core::config::ConversionConfig;
use webpify_core::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = ConversionConfig {
        quality: cli.qlt,
        ..ConversionConfig::default()
    };

    run_batch(&cli.source, &config)
}

fn run_batch(source: &Path, config: &ConversionConfig) -> Result<()> {
    let pipeline = Pipeline::with_defaults();

    let files = collect_files(source).context("Failed to collect input files")?;

    if files.is_empty() {
        println!("No files found.");
        return Ok(());
    }

    println!("Found {} file(s) to process.", files.len());

    let mut report = Report::new();

    // One file at a time; a failure is reported and the batch moves on.
    for path in &files {
        match pipeline.process_file(path, config) {
            Ok(base_name) => {
                println!("File {} processed", base_name);
                report.add(FileResult {
                    path: path.clone(),
                    error: None,
                });
            }
            Err(e) => {
                log::debug!("conversion failed for {}: {}", path.display(), e);
                println!("{e}");
                report.add(FileResult {
                    path: path.clone(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    report.print_summary();

    Ok(())
}
