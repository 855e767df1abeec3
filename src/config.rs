use crate::error::{CsvContactsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub aliases: AliasConfig,
    pub output: OutputConfig,
}

/// Candidate header names for the logical fields, in priority order.
/// Matching is case-insensitive and exact (no fuzzy matching).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasConfig {
    pub firstname: Vec<String>,
    pub email: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub report_file: PathBuf,
    pub preview_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aliases: AliasConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            firstname: vec![
                "first name".to_string(),
                "firstname".to_string(),
                "first_name".to_string(),
                "given name".to_string(),
                "givenname".to_string(),
                "given_name".to_string(),
                "forename".to_string(),
                "name".to_string(),
            ],
            email: vec![
                "email".to_string(),
                "e-mail".to_string(),
                "email address".to_string(),
                "email_address".to_string(),
                "e-mail address".to_string(),
                "contact email".to_string(),
                "contact_email".to_string(),
                "mail".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: PathBuf::from("extracted_contacts.txt"),
            preview_limit: 10,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CsvContactsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CsvContactsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CsvContactsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["csvcontacts.toml", ".csvcontacts.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref firstname) = cli_args.firstname_aliases {
            self.aliases.firstname = split_alias_list(firstname);
        }

        if let Some(ref email) = cli_args.email_aliases {
            self.aliases.email = split_alias_list(email);
        }

        if let Some(ref output_file) = cli_args.output_file {
            self.output.report_file = output_file.clone();
        }

        if let Some(preview_limit) = cli_args.preview_limit {
            self.output.preview_limit = preview_limit;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| CsvContactsError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| CsvContactsError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.aliases.firstname.is_empty() {
            return Err(CsvContactsError::Config {
                message: "At least one first name column alias must be specified".to_string(),
            });
        }

        if self.aliases.email.is_empty() {
            return Err(CsvContactsError::Config {
                message: "At least one email column alias must be specified".to_string(),
            });
        }

        if self.output.report_file.as_os_str().is_empty() {
            return Err(CsvContactsError::Config {
                message: "Report file name must not be empty".to_string(),
            });
        }

        if let Some(parent) = self.output.report_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(CsvContactsError::Config {
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

fn split_alias_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub firstname_aliases: Option<String>,
    pub email_aliases: Option<String>,
    pub output_file: Option<PathBuf>,
    pub preview_limit: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_firstname_aliases(mut self, aliases: Option<String>) -> Self {
        self.firstname_aliases = aliases;
        self
    }

    pub fn with_email_aliases(mut self, aliases: Option<String>) -> Self {
        self.email_aliases = aliases;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_preview_limit(mut self, preview_limit: Option<usize>) -> Self {
        self.preview_limit = preview_limit;
        self
    }
}
