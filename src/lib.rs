use thiserror::Error;

/// Errors raised when resolving punctuation systems, book abbreviations
/// or Bible references.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum PunctuationError {
    #[error("'{}' is not a known punctuation system.", name)]
    SystemNotFound { name: String },

    #[error("'{}' was not found.", book)]
    BookNotFound { book: String },

    #[error("'{}' is not a valid book abbreviation.", value)]
    InvalidAbbreviation { value: String },

    #[error("'{}' is not a valid Bible reference.", reference)]
    InvalidReference { reference: String },
}

pub mod marks;
pub mod models;
pub mod reference;
pub mod tables;
mod registry;

pub use registry::{all_systems, system};
