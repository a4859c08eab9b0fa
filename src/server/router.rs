//! HTTP routing configuration.
//!
//! Defines the JSON endpoints for starting, playing and leaving a game.

use actix_web::web;
use crate::server::handlers::{start_game, shoot, next_level, quit};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/game")
            .route("/start", web::post().to(start_game))
            .route("/shoot", web::post().to(shoot))
            .route("/next-level", web::get().to(next_level))
            .route("/quit", web::post().to(quit))
    );
}
