//! Throw repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::throws_sea as throws_adapter;
use crate::entities::throws;
use crate::errors::domain::DomainError;

/// Throw domain model
///
/// A single recorded pin count belonging to one game. Immutable once
/// created; removed only by bulk cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub id: i64,
    pub game_id: i64,
    pub pins: u8,
    pub created_at: time::OffsetDateTime,
}

/// All throws for a game in insertion order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Throw>, DomainError> {
    let throws = throws_adapter::find_by_game(conn, game_id).await?;
    Ok(throws.into_iter().map(Throw::from).collect())
}

/// Append a throw to the game, after all existing throws.
pub async fn create_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    pins: u8,
) -> Result<Throw, DomainError> {
    let dto = throws_adapter::ThrowCreate::new(game_id, pins);
    let throw = throws_adapter::create_throw(conn, dto).await?;
    Ok(Throw::from(throw))
}

/// Bulk cleanup used by seeding and tests; returns removed row count.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, DomainError> {
    Ok(throws_adapter::delete_all(conn).await?)
}

// Conversions between SeaORM models and domain models

impl From<throws::Model> for Throw {
    fn from(model: throws::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            pins: model.pins as u8,
            created_at: model.created_at,
        }
    }
}
