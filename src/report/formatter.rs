use crate::error::{CsvContactsError, Result};
use crate::extractor::Contact;
use std::path::Path;

/// Render the contact list as a line-oriented report, one
/// `"<firstname> <email>"` line per contact, in the order given. An empty
/// contact list yields an empty string.
pub fn format_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|contact| format!("{} {}", contact.firstname, contact.email))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered report to disk. Refuses to overwrite an existing file
/// unless `force` is set.
pub fn save_report(contacts: &[Contact], path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CsvContactsError::OutputFileExists {
            path: path.display().to_string(),
        });
    }

    std::fs::write(path, format_contacts(contacts)).map_err(CsvContactsError::Io)?;
    Ok(())
}
