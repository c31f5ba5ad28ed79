//! `/user/*`: the session's user deck.

use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::{only, respond};
use crate::error::AppError;
use crate::extractors::{SessionId, ValidatedJson};
use crate::protocol::envelope::ApiResponse;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCard {
    pub card_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveSlot {
    pub card_id: Option<i64>,
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok("Hello"))
}

async fn list(state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
    let deck = state
        .sessions
        .with_session(session.as_str(), |snapshot| {
            let deck = state.user_decks.list(&snapshot)?;
            Ok((snapshot, deck))
        })
        .await?;
    Ok(respond(&session, deck))
}

async fn create(state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
    state
        .sessions
        .with_session(session.as_str(), |snapshot| {
            Ok((state.user_decks.create_deck(snapshot)?, ()))
        })
        .await?;
    Ok(respond(&session, "Deck successfully created."))
}

async fn add_card(
    state: web::Data<AppState>,
    session: SessionId,
    body: ValidatedJson<AddCard>,
) -> Result<HttpResponse, AppError> {
    let card_name = body.into_inner().card_name;
    state
        .sessions
        .with_session(session.as_str(), |snapshot| {
            let snapshot = state
                .user_decks
                .append_card(snapshot, card_name.as_deref())?;
            Ok((snapshot, ()))
        })
        .await?;
    Ok(respond(&session, "Card successfully added."))
}

async fn remove_card(
    state: web::Data<AppState>,
    session: SessionId,
    body: ValidatedJson<RemoveSlot>,
) -> Result<HttpResponse, AppError> {
    let card_id = body.into_inner().card_id;
    state
        .sessions
        .with_session(session.as_str(), |snapshot| {
            Ok((state.user_decks.remove_card(snapshot, card_id)?, ()))
        })
        .await?;
    Ok(respond(&session, "Card successfully removed."))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(only(&["/user", "/user/index"], Method::GET, index))
        .service(only(&["/user/list"], Method::GET, list))
        .service(only(&["/user/create"], Method::POST, create))
        .service(only(&["/user/addcard"], Method::PUT, add_card))
        .service(only(&["/user/removecard"], Method::DELETE, remove_card));
}
