use crate::error::{CsvContactsError, UserFriendlyError};
use crate::extractor::{Contact, ExtractionStats};
use crate::report::format_contacts;
use console::{style, Emoji, Term};
use serde_json;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        }
    }
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    /// Per-file warnings (unidentifiable columns, unreadable files) are part
    /// of the normal result surface, so they show even without -v.
    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &CsvContactsError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    println!();
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Summary and reporting
    pub fn print_extraction_summary(&self, stats: &ExtractionStats) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_summary(stats),
            OutputMode::Json => self.print_json_summary(stats),
            OutputMode::Plain => self.print_plain_summary(stats),
        }
    }

    /// Show the first few formatted report lines, the way the original tool
    /// previewed its download.
    pub fn print_preview(&self, contacts: &[Contact], limit: usize) {
        if self.quiet || contacts.is_empty() {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                self.print_header(&format!("Preview (first {} entries)", limit.min(contacts.len())));
                let shown = &contacts[..limit.min(contacts.len())];
                for line in format_contacts(shown).lines() {
                    println!("  {}", line);
                }
                if contacts.len() > limit {
                    let remaining = contacts.len() - limit;
                    self.info(&format!("... and {} more entries", remaining));
                }
            }
            OutputMode::Json => {
                let shown = &contacts[..limit.min(contacts.len())];
                self.print_json_object(&serde_json::json!({
                    "type": "preview",
                    "entries": shown,
                    "total": contacts.len()
                }));
            }
            OutputMode::Plain => {
                println!("PREVIEW:");
                for line in format_contacts(&contacts[..limit.min(contacts.len())]).lines() {
                    println!("{}", line);
                }
            }
        }
    }

    // Specialized output methods
    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                println!();
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {} // No separator in JSON mode
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_summary(&self, stats: &ExtractionStats) {
        println!();
        self.print_separator();

        if self.use_colors {
            println!(
                "{} {}",
                style("Contact extraction completed!").green().bold(),
                CHECKMARK
            );
        } else {
            println!("✓ Contact extraction completed!");
        }

        println!();
        println!("  Total files:   {}", self.highlight(stats.total_files));
        println!("  Total rows:    {}", self.highlight(stats.total_rows));
        println!("  Valid entries: {}", self.highlight(stats.valid_entries));

        if stats.missing_firstname > 0 || stats.missing_email > 0 || stats.invalid_email > 0 {
            println!();
            println!("  Issues found:");
            if stats.missing_firstname > 0 {
                println!("    Missing first name: {}", stats.missing_firstname);
            }
            if stats.missing_email > 0 {
                println!("    Missing email:      {}", stats.missing_email);
            }
            if stats.invalid_email > 0 {
                println!("    Invalid email:      {}", stats.invalid_email);
            }
        }

        if !stats.file_details.is_empty() {
            println!();
            println!("  Details by file:");
            for file_stats in &stats.file_details {
                println!("    {}", file_stats.filename);
                println!("      Rows processed: {}", file_stats.rows);
                println!("      Valid entries:  {}", file_stats.valid);
                for issue in &file_stats.issues {
                    println!("      ⚠ {}", issue);
                }
            }
        }

        self.print_separator();
    }

    fn print_json_summary(&self, stats: &ExtractionStats) {
        let summary = serde_json::json!({
            "type": "summary",
            "total_files": stats.total_files,
            "total_rows": stats.total_rows,
            "valid_entries": stats.valid_entries,
            "missing_firstname": stats.missing_firstname,
            "missing_email": stats.missing_email,
            "invalid_email": stats.invalid_email,
            "file_details": stats.file_details,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_plain_summary(&self, stats: &ExtractionStats) {
        println!("COMPLETED: Contact extraction");
        println!("Total files: {}", stats.total_files);
        println!("Total rows: {}", stats.total_rows);
        println!("Valid entries: {}", stats.valid_entries);
        println!("Missing first name: {}", stats.missing_firstname);
        println!("Missing email: {}", stats.missing_email);
        println!("Invalid email: {}", stats.invalid_email);
        for file_stats in &stats.file_details {
            println!(
                "FILE: {} rows={} valid={}",
                file_stats.filename, file_stats.rows, file_stats.valid
            );
            for issue in &file_stats.issues {
                println!("ISSUE: {}: {}", file_stats.filename, issue);
            }
        }
    }

    fn highlight(&self, value: usize) -> String {
        if self.use_colors {
            style(value).cyan().bold().to_string()
        } else {
            value.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::FileStats;

    #[test]
    fn test_output_mode_parsing() {
        assert_eq!(OutputMode::from_string("human"), OutputMode::Human);
        assert_eq!(OutputMode::from_string("json"), OutputMode::Json);
        assert_eq!(OutputMode::from_string("plain"), OutputMode::Plain);
        assert_eq!(OutputMode::from_string("invalid"), OutputMode::Human);
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = OutputFormatter::new(OutputMode::Human, 1, false);
        assert_eq!(formatter.mode, OutputMode::Human);
        assert_eq!(formatter.verbose_level, 1);
        assert!(!formatter.quiet);
    }

    #[test]
    fn test_quiet_mode() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert_eq!(formatter.verbose_level, 0);
        assert!(formatter.quiet);
    }

    #[test]
    fn test_should_show_message() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, false);
        assert!(formatter.should_show_message(0));
        assert!(formatter.should_show_message(1));
        assert!(formatter.should_show_message(2));
        assert!(!formatter.should_show_message(3));

        let quiet_formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert!(!quiet_formatter.should_show_message(0));
        assert!(!quiet_formatter.should_show_message(1));
    }

    #[test]
    fn test_summary_does_not_panic_on_empty_stats() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 0, false);
        formatter.print_extraction_summary(&ExtractionStats::default());
    }

    #[test]
    fn test_summary_with_file_details() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 1, false);
        let stats = ExtractionStats {
            total_files: 1,
            total_rows: 2,
            valid_entries: 1,
            missing_firstname: 1,
            missing_email: 0,
            invalid_email: 0,
            file_details: vec![FileStats {
                filename: "a.csv".to_string(),
                rows: 2,
                valid: 1,
                issues: vec![],
            }],
        };
        formatter.print_extraction_summary(&stats);
    }
}
