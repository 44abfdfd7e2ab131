use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes.
///
/// Used by both `main.rs` and route-level tests so that endpoint behavior
/// can be exercised against the exact production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
