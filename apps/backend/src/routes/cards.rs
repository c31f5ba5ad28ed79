//! `/cards/*`: the custom card deck.

use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::{only, respond};
use crate::error::AppError;
use crate::extractors::{PageQuery, SessionId, ValidatedJson};
use crate::protocol::envelope::ApiResponse;
use crate::state::app_state::AppState;

pub const USAGE: &str = "Examples: \
/list GET /?page=1 \
/create POST {'name':'Card name', 'power':10} \
/update PUT {'name':'Card name', 'new_name':'New Card', 'new_power':10} \
/remove DELETE {'name':'Card name'}";

#[derive(Debug, Deserialize)]
pub struct CreateCard {
    pub name: Option<String>,
    pub power: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCard {
    pub name: Option<String>,
    pub new_name: Option<String>,
    pub new_power: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveCard {
    pub name: Option<String>,
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(USAGE))
}

async fn list(
    state: web::Data<AppState>,
    session: SessionId,
    query: PageQuery,
) -> Result<HttpResponse, AppError> {
    let page = state
        .sessions
        .with_session(session.as_str(), |snapshot| {
            let page = state
                .card_decks
                .get_page(&snapshot.custom_deck(), query.page)?;
            Ok((snapshot, page))
        })
        .await?;
    Ok(respond(&session, page))
}

async fn create(
    state: web::Data<AppState>,
    session: SessionId,
    body: ValidatedJson<CreateCard>,
) -> Result<HttpResponse, AppError> {
    let CreateCard { name, power } = body.into_inner();
    state
        .sessions
        .with_session(session.as_str(), |mut snapshot| {
            let deck = state
                .card_decks
                .create(&snapshot.custom_deck(), name.as_deref(), power)?;
            snapshot.cards_deck = Some(deck);
            Ok((snapshot, ()))
        })
        .await?;
    Ok(respond(&session, "Card successfully created."))
}

async fn update(
    state: web::Data<AppState>,
    session: SessionId,
    body: ValidatedJson<UpdateCard>,
) -> Result<HttpResponse, AppError> {
    let UpdateCard {
        name,
        new_name,
        new_power,
    } = body.into_inner();
    state
        .sessions
        .with_session(session.as_str(), |mut snapshot| {
            let deck = state.card_decks.update(
                &snapshot.custom_deck(),
                name.as_deref(),
                new_name.as_deref(),
                new_power,
            )?;
            snapshot.cards_deck = Some(deck);
            Ok((snapshot, ()))
        })
        .await?;
    Ok(respond(&session, "Card successfully updated."))
}

async fn remove(
    state: web::Data<AppState>,
    session: SessionId,
    body: ValidatedJson<RemoveCard>,
) -> Result<HttpResponse, AppError> {
    let name = body.into_inner().name;
    state
        .sessions
        .with_session(session.as_str(), |mut snapshot| {
            let deck = state
                .card_decks
                .remove(&snapshot.custom_deck(), name.as_deref())?;
            snapshot.cards_deck = Some(deck);
            Ok((snapshot, ()))
        })
        .await?;
    Ok(respond(&session, "Card successfully removed."))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(only(&["/cards", "/cards/index"], Method::GET, index))
        .service(only(&["/cards/list"], Method::GET, list))
        .service(only(&["/cards/create"], Method::POST, create))
        .service(only(&["/cards/update"], Method::PUT, update))
        .service(only(&["/cards/remove"], Method::DELETE, remove));
}
