//! Domain-level error type used across the card and user-deck services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which precondition rejected the request.
///
/// Every failure in the core is a rejected precondition; the kind exists so
/// callers and tests can tell them apart without matching on message text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Page number absent or below 1
    InvalidPage,
    /// Requested page lies past the end of the deck
    PageOverreached,
    /// A required request parameter was not supplied
    MissingParameter,
    /// Card name already used in the compiled deck
    DuplicateCard,
    /// Operation targets a card of the permanent deck
    PermanentCard,
    /// Card name not present in the compiled deck
    CardNotFound,
    /// No user deck has been created for the session
    DeckMissing,
    /// A user deck already exists for the session
    DeckExists,
    /// User deck already holds the maximum number of cards
    DeckFull,
    /// Card already occupies the maximum number of slots
    CardLimitReached,
    /// No present slot at the requested index
    SlotNotFound,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation; the message is shown to
    /// clients verbatim.
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, detail) => write!(f, "{detail}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, detail) => detail,
        }
    }
}
