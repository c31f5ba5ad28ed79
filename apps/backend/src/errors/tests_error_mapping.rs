// Unit tests for error mapping - pure domain errors to HTTP-facing AppError
use crate::errors::domain::{DomainError, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn every_validation_kind_maps_to_400() {
    let kinds = [
        ValidationKind::InvalidPage,
        ValidationKind::PageOverreached,
        ValidationKind::MissingParameter,
        ValidationKind::DuplicateCard,
        ValidationKind::PermanentCard,
        ValidationKind::CardNotFound,
        ValidationKind::DeckMissing,
        ValidationKind::DeckExists,
        ValidationKind::DeckFull,
        ValidationKind::CardLimitReached,
        ValidationKind::SlotNotFound,
    ];
    for kind in kinds {
        let app: AppError = DomainError::validation(kind.clone(), "reason").into();
        assert_eq!(app.status().as_u16(), 400, "{kind:?}");
        assert_eq!(app.detail(), "reason");
    }
}

#[test]
fn validation_kind_selects_the_code() {
    let app: AppError =
        DomainError::validation(ValidationKind::DeckFull, "full").into();
    assert_eq!(app.code(), ErrorCode::DeckFull);
}

#[test]
fn boundary_errors_carry_their_own_status() {
    assert_eq!(
        AppError::not_found(ErrorCode::NotFound, "Page does not exist.")
            .status()
            .as_u16(),
        404
    );
    assert_eq!(AppError::method_not_allowed("GET").status().as_u16(), 405);
    assert_eq!(AppError::internal("boom").status().as_u16(), 500);
    assert_eq!(AppError::config("bad env").code(), ErrorCode::ConfigError);
}

#[test]
fn missing_env_var_becomes_config_error() {
    let app: AppError = std::env::VarError::NotPresent.into();
    assert!(matches!(app, AppError::Config { .. }));
}
