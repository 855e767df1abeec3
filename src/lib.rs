pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{AliasConfig, CliOverrides, Config, OutputConfig};
pub use error::{CsvContactsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    classify_row, find_column, Contact, ContactAggregator, EmailValidator, ExtractionStats,
    FileOutcome, FileStats, RowOutcome,
};
pub use report::{format_contacts, save_report};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::PathBuf;
use std::time::Instant;

/// Main library interface for CsvContacts functionality
pub struct CsvContacts {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    force: bool,
    to_stdout: bool,
}

impl CsvContacts {
    /// Create a new CsvContacts instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        // A visible progress bar only makes sense for human output
        let progress_manager =
            ProgressManager::new(!quiet && matches!(output_mode, OutputMode::Human));

        Self {
            config,
            output_formatter,
            progress_manager,
            force: false,
            to_stdout: false,
        }
    }

    /// Create CsvContacts instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        let mut instance = Self::new(config, output_mode, cli_args.verbose, cli_args.quiet);
        instance.force = cli_args.force;
        instance.to_stdout = cli_args.stdout;
        Ok(instance)
    }

    /// Run the full extraction workflow over the given CSV files: extract
    /// contacts, print the summary and preview, and write the report.
    pub fn run(&self, files: &[PathBuf]) -> Result<(Vec<Contact>, ExtractionStats)> {
        self.output_formatter
            .info(&format!("{} file(s) to process", files.len()));
        self.output_formatter.start_operation("Extracting contacts");

        let (contacts, stats) = self.extract_from_paths(files);

        self.output_formatter.print_extraction_summary(&stats);

        // Zero valid contacts is an informational outcome, not a crash; the
        // summary above has already been shown.
        if contacts.is_empty() {
            return Err(CsvContactsError::NoValidContacts {
                files_processed: stats.total_files,
            });
        }

        self.output_formatter
            .print_preview(&contacts, self.config.output.preview_limit);

        if self.to_stdout {
            println!("{}", format_contacts(&contacts));
        } else {
            save_report(&contacts, &self.config.output.report_file, self.force)?;
            self.output_formatter.success(&format!(
                "Wrote {} contact(s) to {}",
                contacts.len(),
                self.config.output.report_file.display()
            ));
        }

        Ok((contacts, stats))
    }

    /// Extract contacts from the given files, surfacing per-file warnings
    /// and errors as they happen. Failures never cross file boundaries.
    pub fn extract_from_paths(&self, files: &[PathBuf]) -> (Vec<Contact>, ExtractionStats) {
        let start_time = Instant::now();
        let progress = self.progress_manager.create_file_progress(files.len() as u64);
        let mut aggregator = ContactAggregator::new(self.config.aliases.clone());

        for file in files {
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unnamed>")
                .to_string();
            progress.set_message(format!("Processing {}", filename));

            let outcome = aggregator.process_path(file);
            match outcome {
                FileOutcome::Processed { rows, valid } => {
                    self.progress_manager.suspend(|| {
                        self.output_formatter.debug(&format!(
                            "{}: {} rows, {} valid",
                            filename, rows, valid
                        ));
                    });
                }
                FileOutcome::ColumnNotFound { issue } => {
                    self.progress_manager.suspend(|| {
                        self.output_formatter
                            .warning(&format!("File '{}': {}", filename, issue));
                    });
                }
                FileOutcome::ParseFailed { cause } => {
                    self.progress_manager.suspend(|| {
                        self.output_formatter
                            .error(&format!("Error processing '{}': {}", filename, cause));
                    });
                }
            }

            progress.inc(1);
        }

        ui::progress::finish_progress_with_summary(
            &progress,
            &format!("Processed {} file(s)", files.len()),
            start_time.elapsed(),
        );

        aggregator.finish()
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<std::path::Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(CsvContactsError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &CsvContactsError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract contacts with minimal setup
pub fn extract_contacts_simple<P: AsRef<std::path::Path>>(
    files: &[P],
) -> (Vec<Contact>, ExtractionStats) {
    ContactAggregator::new(AliasConfig::default()).extract(files)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
