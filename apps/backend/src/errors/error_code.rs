//! Error codes for the cards API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE. They are not part of the
//! response body (which only carries `message` and `status`) but are attached
//! to log events so failures can be grouped.

use core::fmt;

use crate::errors::domain::ValidationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Page number absent or below 1
    InvalidPage,
    /// Page past the end of the deck
    PageOverreached,
    /// Required parameter missing
    MissingParameter,
    /// Card name already taken
    DuplicateCard,
    /// Card belongs to the permanent deck
    PermanentCard,
    /// Card not present in the deck
    CardNotFound,
    /// User deck limit reached
    DeckFull,
    /// Per-card instance limit reached
    CardLimitReached,
    /// User deck slot not present
    SlotNotFound,
    /// General bad request error (malformed body, etc.)
    BadRequest,

    // Resource state
    /// User deck has not been created
    DeckMissing,
    /// User deck already created
    DeckExists,

    // Routing
    /// Unknown route
    NotFound,
    /// Known route, wrong HTTP method
    MethodNotAllowed,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPage => "INVALID_PAGE",
            Self::PageOverreached => "PAGE_OVERREACHED",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::PermanentCard => "PERMANENT_CARD",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::DeckFull => "DECK_FULL",
            Self::CardLimitReached => "CARD_LIMIT_REACHED",
            Self::SlotNotFound => "SLOT_NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",

            Self::DeckMissing => "DECK_MISSING",
            Self::DeckExists => "DECK_EXISTS",

            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidPage => Self::InvalidPage,
            ValidationKind::PageOverreached => Self::PageOverreached,
            ValidationKind::MissingParameter => Self::MissingParameter,
            ValidationKind::DuplicateCard => Self::DuplicateCard,
            ValidationKind::PermanentCard => Self::PermanentCard,
            ValidationKind::CardNotFound => Self::CardNotFound,
            ValidationKind::DeckMissing => Self::DeckMissing,
            ValidationKind::DeckExists => Self::DeckExists,
            ValidationKind::DeckFull => Self::DeckFull,
            ValidationKind::CardLimitReached => Self::CardLimitReached,
            ValidationKind::SlotNotFound => Self::SlotNotFound,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
