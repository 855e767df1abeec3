use crate::extractor::email::EmailValidator;
use serde::{Deserialize, Serialize};

/// A validated contact. Only constructed once both fields have passed the
/// row-level checks; both are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub firstname: String,
    pub email: String,
    pub source_file: String,
}

/// Classification of a single data row. Every row maps to exactly one
/// outcome; the rules are evaluated in declaration order and the first
/// matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    MissingFirstName,
    MissingEmail,
    InvalidEmail,
    Valid(Contact),
}

/// Classify one row given its (possibly absent) first name and email cells.
///
/// The first name is never validated beyond non-emptiness; a missing first
/// name wins over any email problem.
pub fn classify_row(
    firstname: Option<&str>,
    email: Option<&str>,
    source_file: &str,
    validator: &EmailValidator,
) -> RowOutcome {
    let firstname = firstname.map(str::trim).unwrap_or("");
    if firstname.is_empty() {
        return RowOutcome::MissingFirstName;
    }

    let email = email.map(str::trim).unwrap_or("");
    if email.is_empty() {
        return RowOutcome::MissingEmail;
    }

    if !validator.is_valid(email) {
        return RowOutcome::InvalidEmail;
    }

    RowOutcome::Valid(Contact {
        firstname: firstname.to_string(),
        email: email.to_string(),
        source_file: source_file.to_string(),
    })
}
