pub mod aggregator;
pub mod columns;
pub mod email;
pub mod row;

pub use aggregator::{ContactAggregator, ExtractionStats, FileOutcome, FileStats};
pub use columns::find_column;
pub use email::EmailValidator;
pub use row::{classify_row, Contact, RowOutcome};
