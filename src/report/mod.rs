pub mod formatter;

pub use formatter::{format_contacts, save_report};
