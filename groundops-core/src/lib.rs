pub mod catalog;
pub mod choice;
pub mod dates;
pub mod models;

pub use catalog::{Catalog, Keyed};
pub use choice::Choice;
pub use dates::{parse_display_date, DateRange};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate record key: {0}")]
    DuplicateKey(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
