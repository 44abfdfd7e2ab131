//! SeaORM adapter for the throws table - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::throws;

/// DTO for creating a new throw.
#[derive(Debug, Clone)]
pub struct ThrowCreate {
    pub game_id: i64,
    pub pins: u8,
}

impl ThrowCreate {
    pub fn new(game_id: i64, pins: u8) -> Self {
        Self { game_id, pins }
    }
}

/// All throws for a game in insertion order (id ascending). Frame
/// segmentation depends on this ordering.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<throws::Model>, sea_orm::DbErr> {
    throws::Entity::find()
        .filter(throws::Column::GameId.eq(game_id))
        .order_by_asc(throws::Column::Id)
        .all(conn)
        .await
}

/// Appends a throw after all existing throws for the game.
pub async fn create_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ThrowCreate,
) -> Result<throws::Model, sea_orm::DbErr> {
    let throw_active = throws::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        pins: Set(i16::from(dto.pins)),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    throw_active.insert(conn).await
}

/// Bulk cleanup: removes every throw.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = throws::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
