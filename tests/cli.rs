use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn csvcontacts() -> Command {
    Command::cargo_bin("csvcontacts").expect("binary builds")
}

#[test]
fn clean_extraction_exits_zero_and_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "First Name,Email\nAl,al@x.com\nBee,bee@x.com\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Al al@x.com\nBee bee@x.com"
    );
}

#[test]
fn mixed_files_report_only_valid_contacts() {
    // Scenario: one file with a missing first name, another whose email
    // column holds an invalid address.
    let temp_dir = TempDir::new().unwrap();
    let file_a = temp_dir.path().join("a.csv");
    let file_b = temp_dir.path().join("b.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&file_a, "Name,Email\nAl,al@x.com\n,bee@x.com\n").unwrap();
    fs::write(&file_b, "FirstName,Mail\nCid,not-an-email\n").unwrap();

    csvcontacts()
        .arg(&file_a)
        .arg(&file_b)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(2) // success with issues
        .stdout(predicate::str::contains("Valid entries: 1"))
        .stdout(predicate::str::contains("Missing first name: 1"))
        .stdout(predicate::str::contains("Invalid email: 1"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Al al@x.com");
}

#[test]
fn unidentifiable_email_column_warns_but_other_file_processed() {
    let temp_dir = TempDir::new().unwrap();
    let phones = temp_dir.path().join("phones.csv");
    let good = temp_dir.path().join("good.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&phones, "Name,Phone\nAl,555-1234\n").unwrap();
    fs::write(&good, "Name,Email\nBee,bee@x.com\n").unwrap();

    csvcontacts()
        .arg(&phones)
        .arg(&good)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Could not identify email column"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Bee bee@x.com");
}

#[test]
fn short_rows_do_not_discard_the_file() {
    // A row with fewer cells than the header is a row with absent fields;
    // the file's other contacts still come through.
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("short.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Email\nAl,al@x.com\nBee\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Missing email: 1"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Al al@x.com");
}

#[test]
fn summary_lists_per_file_details_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Email\nAl,al@x.com\n").unwrap();

    // Human mode without -v still shows the per-file breakdown
    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Details by file"))
        .stdout(predicate::str::contains("contacts.csv"))
        .stdout(predicate::str::contains("Rows processed: 1"));
}

#[test]
fn no_valid_contacts_is_informational_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("phones.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Phone\nAl,555-1234\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("No valid contacts"))
        .stdout(predicate::str::contains("SUGGESTION:"));

    assert!(!output.exists());
}

#[test]
fn stdout_mode_prints_report_instead_of_writing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    fs::write(&input, "Name,Email\nAl,al@x.com\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--stdout")
        .arg("--quiet")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Al al@x.com"));
}

#[test]
fn refuses_to_overwrite_report_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Email\nAl,al@x.com\n").unwrap();
    fs::write(&output, "precious").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(8)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "precious");

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Al al@x.com");
}

#[test]
fn directory_input_processes_contained_csv_files() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(data_dir.join("a.csv"), "Name,Email\nAl,al@x.com\n").unwrap();
    fs::write(data_dir.join("b.csv"), "Name,Email\nBee,bee@x.com\n").unwrap();
    fs::write(data_dir.join("ignored.txt"), "not a csv").unwrap();
    let output = temp_dir.path().join("out.txt");

    csvcontacts()
        .arg(&data_dir)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Al al@x.com\nBee bee@x.com"
    );
}

#[test]
fn missing_input_path_exits_with_invalid_path_code() {
    csvcontacts()
        .arg("/no/such/file.csv")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid input path"));
}

#[test]
fn json_mode_emits_summary_object() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Email\nAl,al@x.com\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"summary\""))
        .stdout(predicate::str::contains("\"valid_entries\": 1"));
}

#[test]
fn dry_run_lists_files_without_extracting() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Name,Email\nAl,al@x.com\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--dry-run")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.csv"));

    assert!(!output.exists());
}

#[test]
fn generate_config_writes_sample_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sample.toml");

    csvcontacts()
        .arg("--generate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[aliases]"));
    assert!(content.contains("first name"));
}

#[test]
fn custom_alias_overrides_are_honored() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("german.csv");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Vorname,Email\nAnna,anna@x.de\n").unwrap();

    csvcontacts()
        .arg(&input)
        .arg("--firstname-aliases")
        .arg("vorname,name")
        .arg("--output")
        .arg(&output)
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Anna anna@x.de");
}
