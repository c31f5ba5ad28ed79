//! Error handling for the cards backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, ValidationKind};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
