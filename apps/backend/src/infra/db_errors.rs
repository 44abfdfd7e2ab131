//! SeaORM -> DomainError translation helpers.
//!
//! Adapters surface `sea_orm::DbErr`; the repos layer converts it into
//! `crate::errors::domain::DomainError` here (via `From`), and higher
//! layers then map `DomainError` to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with driver detail kept out of
/// user-visible messages.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            // Structured game not found error from the adapter layer
            if let Some(game_id_str) = msg.strip_prefix("GAME_NOT_FOUND:") {
                if let Ok(game_id) = game_id_str.parse::<i64>() {
                    warn!(trace_id = %trace_id, game_id, "Game not found");
                    return DomainError::not_found(
                        NotFoundKind::Game,
                        format!("Game {game_id} not found"),
                    );
                }
            }
            // Fallback if parsing fails
            warn!(trace_id = %trace_id, raw_error = %msg, "Failed to parse GAME_NOT_FOUND error");
            return DomainError::not_found(NotFoundKind::Game, "Game not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("x".into()));
        assert!(matches!(err, DomainError::NotFound(_, _)));
    }

    #[test]
    fn structured_game_not_found_carries_id() {
        let err = map_db_err(sea_orm::DbErr::Custom("GAME_NOT_FOUND:42".into()));
        match err {
            DomainError::NotFound(NotFoundKind::Game, detail) => {
                assert_eq!(detail, "Game 42 not found");
            }
            other => panic!("expected game not found, got {other:?}"),
        }
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint \"games_pkey\"".into(),
        ));
        assert!(matches!(err, DomainError::Conflict(_, _)));
    }

    #[test]
    fn fk_violation_maps_to_validation() {
        let err = map_db_err(sea_orm::DbErr::Custom("SQLSTATE(23503)".into()));
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn timeout_maps_to_infra_timeout() {
        let err = map_db_err(sea_orm::DbErr::Custom("connection pool timeout".into()));
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::Timeout, _)
        ));
    }

    #[test]
    fn unknown_error_is_sanitized() {
        let err = map_db_err(sea_orm::DbErr::Custom("something exploded".into()));
        match err {
            DomainError::Infra(InfraErrorKind::Other(_), detail) => {
                assert_eq!(detail, "Database operation failed");
            }
            other => panic!("expected sanitized infra error, got {other:?}"),
        }
    }
}
