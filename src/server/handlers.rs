//! HTTP handlers for the game endpoints.
//!
//! Store access is blocking file I/O, so each call runs on the actix
//! blocking pool. Validation failures are answered as `{"error": code}`
//! bodies; only store failures become server errors.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::server::state::AppState;
use crate::server::messages::{StartRequest, ShootRequest, PlayerRef, ErrorBody, Ack};
use crate::server::http_error::{internal_error, is_internal};

pub async fn start_game(
    data: web::Data<AppState>,
    req: web::Json<StartRequest>,
) -> HttpResponse {
    let session = data.session.clone();
    let name = req.into_inner().name;

    match web::block(move || session.start(&name)).await {
        Ok(Ok(view)) => HttpResponse::Ok().json(view),
        Ok(Err(e)) if is_internal(&e) => internal_error(&e, None),
        Ok(Err(e)) => HttpResponse::BadRequest().json(ErrorBody::new(e.code())),
        Err(e) => internal_error(&e, None),
    }
}

pub async fn shoot(
    data: web::Data<AppState>,
    req: web::Json<ShootRequest>,
) -> HttpResponse {
    let session = data.session.clone();
    let ShootRequest { player_name, x, y } = req.into_inner();
    let context = player_name.clone();

    match web::block(move || session.shoot(&player_name, x, y)).await {
        Ok(Ok(report)) => HttpResponse::Ok().json(report),
        Ok(Err(e)) if is_internal(&e) => internal_error(&e, Some(context.as_str())),
        Ok(Err(e)) => {
            debug!("[Server] Shot rejected for {:?}: {}", context, e);
            HttpResponse::Ok().json(ErrorBody::new(e.code()))
        }
        Err(e) => internal_error(&e, Some(context.as_str())),
    }
}

/// Unknown or missing players get a 404 so the client returns to the start
/// screen.
pub async fn next_level(
    data: web::Data<AppState>,
    query: web::Query<PlayerRef>,
) -> HttpResponse {
    let session = data.session.clone();
    let player_name = query.into_inner().player_name;
    let context = player_name.clone();

    match web::block(move || session.next_level(&player_name)).await {
        Ok(Ok(view)) => HttpResponse::Ok().json(view),
        Ok(Err(e)) if is_internal(&e) => internal_error(&e, Some(context.as_str())),
        Ok(Err(e)) => HttpResponse::NotFound().json(ErrorBody::new(e.code())),
        Err(e) => internal_error(&e, Some(context.as_str())),
    }
}

pub async fn quit(
    data: web::Data<AppState>,
    req: web::Json<PlayerRef>,
) -> HttpResponse {
    data.session.quit(&req.player_name);
    HttpResponse::Ok().json(Ack { ok: true })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, web, App, http::StatusCode};
    use serde_json::{json, Value};

    use crate::game::types::{Board, CellState, Player, PlayerState};
    use crate::server::messages::{Ack, ErrorBody};
    use crate::server::router::config;
    use crate::server::state::AppState;
    use crate::store::{GameStore, InMemoryStore};

    fn one_ship_state(name: &str) -> PlayerState {
        let mut board = Board::new(5);
        board.cell_mut(2, 2).unwrap().state = CellState::Ship;
        PlayerState::new(Player::new(name, 1), board)
    }

    fn app_data(store: Arc<InMemoryStore>) -> web::Data<AppState> {
        web::Data::new(AppState::new(store))
    }

    #[actix_web::test]
    async fn test_start_returns_fresh_board() {
        let store = Arc::new(InMemoryStore::new());
        let app = test::init_service(App::new().app_data(app_data(store.clone())).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/game/start")
            .set_json(json!({ "name": "Ann" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["playerName"], "Ann");
        assert_eq!(body["level"], 1);
        assert_eq!(body["board"]["size"], 5);
        assert_eq!(body["board"]["cells"].as_array().unwrap().len(), 25);
        assert!(store.get("ann").unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_shoot_flow() {
        let store = Arc::new(InMemoryStore::with_states(vec![one_ship_state("Ann")]));
        let app = test::init_service(App::new().app_data(app_data(store.clone())).configure(config)).await;

        let miss = test::TestRequest::post()
            .uri("/game/shoot")
            .set_json(json!({ "playerName": "Ann", "x": 0, "y": 0 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, miss).await;
        assert_eq!(body, json!({ "result": "Miss", "shipsRemaining": 1 }));

        let hit = test::TestRequest::post()
            .uri("/game/shoot")
            .set_json(json!({ "playerName": "ann", "x": 2, "y": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, hit).await;
        assert_eq!(body, json!({ "result": "Hit", "shipsRemaining": 0, "nextLevel": 2 }));

        let again = test::TestRequest::post()
            .uri("/game/shoot")
            .set_json(json!({ "playerName": "Ann", "x": 2, "y": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, again).await;
        assert_eq!(body, json!({ "result": "Already", "shipsRemaining": 0 }));
    }

    #[actix_web::test]
    async fn test_shoot_validation_errors() {
        let store = Arc::new(InMemoryStore::with_states(vec![one_ship_state("Ann")]));
        let app = test::init_service(App::new().app_data(app_data(store)).configure(config)).await;

        let cases = [
            (json!({ "playerName": "", "x": 0, "y": 0 }), "MissingPlayer"),
            (json!({ "playerName": "Bob", "x": 0, "y": 0 }), "PlayerNotFound"),
            (json!({ "playerName": "Ann", "x": 9, "y": 0 }), "CellNotFound"),
        ];
        for (payload, code) in cases {
            let req = test::TestRequest::post().uri("/game/shoot").set_json(payload).to_request();
            let body: ErrorBody = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, ErrorBody::new(code));
        }
    }

    #[actix_web::test]
    async fn test_shoot_missing_coordinates_default_to_origin() {
        let store = Arc::new(InMemoryStore::with_states(vec![one_ship_state("Ann")]));
        let app = test::init_service(App::new().app_data(app_data(store)).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/game/shoot")
            .set_json(json!({ "playerName": "Ann" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "result": "Miss", "shipsRemaining": 1 }));

        let req = test::TestRequest::post().uri("/game/shoot").set_json(json!({})).to_request();
        let body: ErrorBody = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, ErrorBody::new("MissingPlayer"));
    }

    #[actix_web::test]
    async fn test_next_level() {
        let store = Arc::new(InMemoryStore::with_states(vec![one_ship_state("Ann")]));
        let app = test::init_service(App::new().app_data(app_data(store.clone())).configure(config)).await;

        let req = test::TestRequest::get().uri("/game/next-level?playerName=Ann").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["level"], 2);
        assert_eq!(body["board"]["size"], 6);
        assert_eq!(store.get("Ann").unwrap().unwrap().player.level, 2);

        let req = test::TestRequest::get().uri("/game/next-level?playerName=Nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_quit_acknowledges() {
        let store = Arc::new(InMemoryStore::with_states(vec![one_ship_state("Ann")]));
        let app = test::init_service(App::new().app_data(app_data(store.clone())).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/game/quit")
            .set_json(json!({ "playerName": "Ann" }))
            .to_request();
        let body: Ack = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Ack { ok: true });
        assert!(store.get("Ann").unwrap().is_some());
    }
}
