use crate::config::{CliOverrides, Config};
use crate::error::{CsvContactsError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "csvcontacts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract first names and email addresses from CSV files")]
#[command(
    long_about = "CsvContacts reads one or more CSV files, identifies the first name and \
                       email columns by their headers, and writes the validated contacts \
                       into a plain text report."
)]
#[command(before_help = "📧 CsvContacts - Contact Extraction Tool")]
#[command(after_help = "EXAMPLES:\n  \
    csvcontacts subscribers.csv\n  \
    csvcontacts leads.csv signups.csv --output contacts.txt --verbose\n  \
    csvcontacts exports/ --firstname-aliases \"vorname,prenom\" --force\n  \
    csvcontacts data.csv --config my-config.toml --output-format json\n\n\
    For more information, visit: https://github.com/user/csvcontacts")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// CSV files or directories containing CSV files
    #[arg(required_unless_present = "generate_config")]
    pub inputs: Vec<PathBuf>,

    /// Output report file (defaults to extracted_contacts.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First name column aliases (comma-separated, highest priority first)
    #[arg(long, help = "Header names accepted for the first name column")]
    pub firstname_aliases: Option<String>,

    /// Email column aliases (comma-separated, highest priority first)
    #[arg(long, help = "Header names accepted for the email column")]
    pub email_aliases: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Number of entries shown in the summary preview
    #[arg(long, help = "How many extracted entries to preview in the summary")]
    pub preview: Option<usize>,

    /// Print the report to stdout instead of writing a file
    #[arg(long, help = "Write the report to stdout instead of a file")]
    pub stdout: bool,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force overwrite of an existing report file
    #[arg(long, help = "Overwrite an existing report file")]
    pub force: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Show which files would be processed without extracting")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_firstname_aliases(self.firstname_aliases.clone())
            .with_email_aliases(self.email_aliases.clone())
            .with_output_file(self.output.clone())
            .with_preview_limit(self.preview)
    }

    /// Expand the input arguments into an ordered list of CSV files.
    ///
    /// File arguments are kept in the order given; a directory argument
    /// contributes its `.csv` files in sorted path order so that runs are
    /// deterministic.
    pub fn collect_input_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(input)
                    .follow_links(false)
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path())
                    .filter(|path| has_csv_extension(path))
                    .collect();
                found.sort();
                files.extend(found);
            } else {
                return Err(CsvContactsError::InvalidPath {
                    path: input.display().to_string(),
                });
            }
        }

        if files.is_empty() {
            return Err(CsvContactsError::NoInputFiles {
                searched: self
                    .inputs
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            });
        }

        Ok(files)
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

fn has_csv_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
