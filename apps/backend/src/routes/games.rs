//! Game-related HTTP routes.
//!
//! JSON equivalents of a classic edit/update controller pair: reading a
//! game returns its throws with the pairwise frame segmentation applied,
//! and appending a throw returns the refreshed view (where the original
//! flow would redirect back to the edit page).

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::frames;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::game_id::GameId;
use crate::repos::{games, throws};
use crate::state::app_state::AppState;

/// Read-side view of a game: ordered throws plus the naive pairwise frames.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub throws: Vec<u8>,
    pub frames: Vec<Vec<u8>>,
}

impl GameResponse {
    fn from_pins(id: i64, pins: Vec<u8>) -> Self {
        let segmented = frames::frames(&pins).map(<[u8]>::to_vec).collect();
        Self {
            id,
            throws: pins,
            frames: segmented,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThrowRequest {
    pins: u8,
}

async fn load_pins(
    txn: &sea_orm::DatabaseTransaction,
    game_id: i64,
) -> Result<Vec<u8>, AppError> {
    let game = games::require_game(txn, game_id).await?;
    let throws = throws::find_by_game(txn, game.id).await?;
    Ok(throws.into_iter().map(|t| t.pins).collect())
}

/// GET /api/games/{game_id}
///
/// Returns the game's ordered throws and their frame segmentation.
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let id = game_id.0;

    let pins = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { load_pins(txn, id).await })
    })
    .await?;

    Ok(web::Json(GameResponse::from_pins(id, pins)))
}

/// POST /api/games/{game_id}/throws
///
/// Appends a throw to the game and returns the refreshed game view.
/// Pin counts above the domain maximum are rejected; nothing validates the
/// pair-total of a frame, matching the recording-only scope.
async fn create_throw(
    http_req: HttpRequest,
    game_id: GameId,
    body: web::Json<ThrowRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let pins = body.into_inner().pins;

    if pins > frames::MAX_PINS {
        return Err(AppError::bad_request(
            ErrorCode::InvalidPins,
            format!("Pins must be at most {}, got: {pins}", frames::MAX_PINS),
        ));
    }

    let all_pins = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            throws::create_throw(txn, id, pins).await?;
            load_pins(txn, id).await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from_pins(id, all_pins)))
}

/// POST /api/games
///
/// Creates an empty game (the explicit setup step; games are otherwise
/// only created by seeding).
async fn create_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(games::create_game(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from_pins(game.id, Vec::new())))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/throws").route(web::post().to(create_throw)));
}
