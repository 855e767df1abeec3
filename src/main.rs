use clap::Parser;
use csvcontacts::{
    Cli, Config, CsvContacts, CsvContactsError, OutputFormatter, OutputMode, UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create CsvContacts instance
    let app = match CsvContacts::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    let files = match cli.collect_input_files() {
        Ok(files) => files,
        Err(e) => {
            app.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&files, &app);
    }

    // Execute main extraction workflow
    match app.run(&files) {
        Ok((_contacts, stats)) => {
            if stats.has_issues() {
                2 // Success with warnings
            } else {
                0 // Success
            }
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

// Exit code 2 is reserved for "success with warnings", so every error
// variant gets a code above it.
fn exit_code_for(error: &CsvContactsError) -> i32 {
    match error {
        CsvContactsError::InvalidPath { .. } => 4,
        CsvContactsError::NoInputFiles { .. } => 3,
        CsvContactsError::NoValidContacts { .. } => 6,
        CsvContactsError::OutputFileExists { .. } => 8,
        _ => 1, // General error
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "csvcontacts.toml".to_string());

    match CsvContacts::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  csvcontacts <files...> --config {}", config_path);
            println!("\nEdit the file to customize the accepted column aliases.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(files: &[std::path::PathBuf], app: &CsvContacts) -> i32 {
    let formatter = app.output_formatter();

    formatter.info("DRY RUN MODE - No contacts will be extracted");
    formatter.print_separator();

    let config = app.config();
    formatter.info("Configuration that would be used:");
    println!(
        "  First name aliases: {}",
        config.aliases.firstname.join(", ")
    );
    println!("  Email aliases: {}", config.aliases.email.join(", "));
    println!("  Report file: {}", config.output.report_file.display());
    println!("  Preview limit: {}", config.output.preview_limit);

    formatter.print_separator();

    formatter.info(&format!("{} file(s) would be processed:", files.len()));
    for file in files {
        println!("  {}", file.display());
    }

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to perform actual extraction");

    0
}

fn print_startup_error(error: &CsvContactsError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
