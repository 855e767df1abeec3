use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvContactsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input path: {path}")]
    InvalidPath { path: String },

    #[error("No CSV files found in the given inputs")]
    NoInputFiles { searched: Vec<String> },

    #[error("Output file already exists: {path}")]
    OutputFileExists { path: String },

    #[error("No valid contacts found in the input files")]
    NoValidContacts { files_processed: usize },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CsvContactsError {
    fn user_message(&self) -> String {
        match self {
            CsvContactsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            CsvContactsError::InvalidPath { path } => {
                format!("Invalid input path: {}", path)
            }
            CsvContactsError::NoInputFiles { searched } => {
                format!("No CSV files found in: {}", searched.join(", "))
            }
            CsvContactsError::OutputFileExists { path } => {
                format!("Output file already exists: {}", path)
            }
            CsvContactsError::NoValidContacts { files_processed } => {
                format!(
                    "No valid contacts found across {} file(s)",
                    files_processed
                )
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CsvContactsError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            CsvContactsError::InvalidPath { .. } => Some(
                "Verify the path exists and points to a CSV file or a directory containing CSV files.".to_string()
            ),
            CsvContactsError::NoInputFiles { .. } => Some(
                "Pass one or more .csv files, or a directory that contains them.".to_string()
            ),
            CsvContactsError::OutputFileExists { .. } => Some(
                "Remove the existing file, choose a different name with --output, or use --force to overwrite.".to_string()
            ),
            CsvContactsError::NoValidContacts { .. } => Some(
                "Make sure your CSV files have a header row with columns like 'First Name' and 'Email', and that email addresses are in a valid format (e.g., name@domain.com).".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CsvContactsError {
    fn from(error: toml::de::Error) -> Self {
        CsvContactsError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvContactsError>;
