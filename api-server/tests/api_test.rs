use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use daily_maze::{parse_instant, FixedClock};
use daily_maze_server::{configure, AppState};
use serde_json::Value;

/// Shortest solution for 2025-8-4, newest move first
const WINNING_TOKEN: &str = "wwwwaawwaaaaaaaawwwwaaaaaawwaawwddddddddddddddddddw";

fn state() -> web::Data<AppState> {
    // Noon in UTC+8 on the day of maze number 1
    let at = parse_instant("2025-08-04T12:00:00+08:00").expect("valid timestamp");
    web::Data::new(AppState::new(Arc::new(FixedClock(at))))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_rt::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn menu_scene() {
    let (status, body) = get("/i.webp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"], "menu");
    assert_eq!(body["background"], "bg-menu.png");
}

#[actix_rt::test]
async fn unknown_path_is_not_found() {
    for uri in ["/xyz", "/", "/wasd.png"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["scene"], "not_found");
    }
}

#[actix_rt::test]
async fn playing_scene() {
    let (status, body) = get("/api/dswi.webp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"], "playing");
    assert_eq!(body["move_count"], 3);
    assert_eq!(body["maze_number"], "001");
    assert_eq!(body["local_time"], "04/08/2025, 12:00:00");
    assert_eq!(body["goal"]["x"], 19);
    assert_eq!(body["grid"].as_array().map(Vec::len), Some(18));
}

#[actix_rt::test]
async fn winning_scene() {
    let (status, body) = get(&format!("/{}i.webp", WINNING_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"], "won");
    assert_eq!(body["maze_number"], "001");
    assert_eq!(body["moves"], "51");
    assert!(body.get("grid").is_none());
}
