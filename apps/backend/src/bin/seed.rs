//! Seeds the database with its default records: one game with the throws
//! 6, 3, 4, 4. Existing games and throws are bulk-destroyed first, so the
//! seed is idempotent.

use backend::config::db::{DbOwner, DbProfile};
use backend::error::AppError;
use backend::infra::db::bootstrap_db;
use backend::repos::{games, throws};
use sea_orm::TransactionTrait;

const SEED_THROWS: [u8; 4] = [6, 3, 4, 4];

async fn run(profile: DbProfile) -> Result<(), AppError> {
    let conn = bootstrap_db(profile, DbOwner::Owner).await?;

    let txn = conn.begin().await?;

    throws::delete_all(&txn).await?;
    games::delete_all(&txn).await?;

    let game = games::create_game(&txn).await?;
    for pins in SEED_THROWS {
        throws::create_throw(&txn, game.id, pins).await?;
    }

    txn.commit().await?;

    tracing::info!(game_id = game.id, "✅ seeded game with throws {:?}", SEED_THROWS);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("backend=info,migration=info,sqlx=warn")
        .init();

    let profile = match std::env::var("SEED_ENV").as_deref() {
        Ok("test") => DbProfile::Test,
        _ => DbProfile::Prod,
    };

    if let Err(e) = run(profile).await {
        eprintln!("❌ Seeding failed: {e}");
        std::process::exit(1);
    }
}
