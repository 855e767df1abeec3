use crate::config::AliasConfig;
use crate::extractor::columns::find_column;
use crate::extractor::email::EmailValidator;
use crate::extractor::row::{classify_row, Contact, RowOutcome};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const MISSING_FIRSTNAME_COLUMN_ISSUE: &str = "Could not identify first name column";
pub const MISSING_EMAIL_COLUMN_ISSUE: &str = "Could not identify email column";

/// Aggregate counts across all processed files, plus a per-file breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub total_files: usize,
    pub total_rows: usize,
    pub valid_entries: usize,
    pub missing_firstname: usize,
    pub missing_email: usize,
    pub invalid_email: usize,
    pub file_details: Vec<FileStats>,
}

impl ExtractionStats {
    pub fn has_issues(&self) -> bool {
        self.missing_firstname > 0
            || self.missing_email > 0
            || self.invalid_email > 0
            || self.file_details.iter().any(|f| !f.issues.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub filename: String,
    pub rows: usize,
    pub valid: usize,
    pub issues: Vec<String>,
}

/// What happened to a single file, so the caller can surface a warning or
/// error for it. Every outcome is also recorded in the statistics; no file
/// outcome ever aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Processed { rows: usize, valid: usize },
    ColumnNotFound { issue: String },
    ParseFailed { cause: String },
}

/// Drives column resolution and row classification across input files,
/// accumulating contacts and statistics. Files are processed strictly in
/// the order given; contacts come out in file order, then row order.
pub struct ContactAggregator {
    aliases: AliasConfig,
    validator: EmailValidator,
    contacts: Vec<Contact>,
    stats: ExtractionStats,
}

impl ContactAggregator {
    pub fn new(aliases: AliasConfig) -> Self {
        Self {
            aliases,
            validator: EmailValidator::new(),
            contacts: Vec::new(),
            stats: ExtractionStats::default(),
        }
    }

    /// Process one file from a path, treating an unreadable file the same
    /// way as an unparseable one.
    pub fn process_path(&mut self, path: &Path) -> FileOutcome {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string();

        match std::fs::File::open(path) {
            Ok(file) => self.process_file(&filename, file),
            Err(e) => self.record_parse_failure(&filename, e.to_string()),
        }
    }

    /// Process one file from any reader. The file's failure modes are
    /// isolated: they are recorded in the statistics and returned, never
    /// propagated.
    pub fn process_file<R: Read>(&mut self, filename: &str, reader: R) -> FileOutcome {
        let (headers, records) = match read_tabular(reader) {
            Ok(parsed) => parsed,
            Err(cause) => {
                // A parse error poisons the whole file; rows decoded before
                // the error contribute nothing.
                return self.record_parse_failure(filename, cause);
            }
        };

        self.stats.total_files += 1;
        let mut file_stats = FileStats {
            filename: filename.to_string(),
            rows: records.len(),
            valid: 0,
            issues: Vec::new(),
        };
        self.stats.total_rows += records.len();

        let firstname_col = find_column(&headers, &self.aliases.firstname);
        let email_col = find_column(&headers, &self.aliases.email);

        let issue = if firstname_col.is_none() {
            Some(MISSING_FIRSTNAME_COLUMN_ISSUE)
        } else if email_col.is_none() {
            Some(MISSING_EMAIL_COLUMN_ISSUE)
        } else {
            None
        };

        if let Some(issue) = issue {
            file_stats.issues.push(issue.to_string());
            self.stats.file_details.push(file_stats);
            return FileOutcome::ColumnNotFound {
                issue: issue.to_string(),
            };
        }

        let firstname_idx = header_index(&headers, firstname_col.as_deref());
        let email_idx = header_index(&headers, email_col.as_deref());

        for record in &records {
            let firstname = firstname_idx.and_then(|i| record.get(i));
            let email = email_idx.and_then(|i| record.get(i));

            match classify_row(firstname, email, filename, &self.validator) {
                RowOutcome::MissingFirstName => self.stats.missing_firstname += 1,
                RowOutcome::MissingEmail => self.stats.missing_email += 1,
                RowOutcome::InvalidEmail => self.stats.invalid_email += 1,
                RowOutcome::Valid(contact) => {
                    self.contacts.push(contact);
                    self.stats.valid_entries += 1;
                    file_stats.valid += 1;
                }
            }
        }

        let outcome = FileOutcome::Processed {
            rows: file_stats.rows,
            valid: file_stats.valid,
        };
        self.stats.file_details.push(file_stats);
        outcome
    }

    /// Consume the aggregator once every file has been fed in.
    pub fn finish(self) -> (Vec<Contact>, ExtractionStats) {
        (self.contacts, self.stats)
    }

    /// Whole-batch convenience for library users and tests: processes every
    /// path in order and returns the final contacts and statistics.
    pub fn extract<P: AsRef<Path>>(mut self, files: &[P]) -> (Vec<Contact>, ExtractionStats) {
        for file in files {
            self.process_path(file.as_ref());
        }
        self.finish()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    fn record_parse_failure(&mut self, filename: &str, cause: String) -> FileOutcome {
        self.stats.total_files += 1;
        self.stats.file_details.push(FileStats {
            filename: filename.to_string(),
            rows: 0,
            valid: 0,
            issues: vec![format!("Error reading file: {}", cause)],
        });
        FileOutcome::ParseFailed { cause }
    }
}

/// Parse a whole delimited file up front. Any record-level error makes the
/// file count as unreadable.
///
/// Rows may legitimately carry fewer or more cells than the header; an
/// absent cell classifies as a missing field, not as file corruption.
fn read_tabular<R: Read>(
    reader: R,
) -> std::result::Result<(Vec<String>, Vec<StringRecord>), String> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err("no columns to parse from file".to_string());
    }

    let mut records = Vec::new();
    for record in csv_reader.records() {
        records.push(record.map_err(|e| e.to_string())?);
    }

    Ok((headers, records))
}

fn header_index(headers: &[String], header: Option<&str>) -> Option<usize> {
    header.and_then(|name| headers.iter().position(|h| h == name))
}
