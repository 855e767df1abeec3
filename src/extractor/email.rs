use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Syntactic email check.
///
/// This verifies shape only (local part, `@`, domain, dot, two-or-more
/// letter top-level segment). It says nothing about deliverability or
/// whether the domain exists.
pub struct EmailValidator {
    // The pattern is a compile-time constant; if it were ever malformed,
    // every address would simply be rejected.
    pattern: Option<Regex>,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(EMAIL_PATTERN).ok(),
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(trimmed))
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}
