//! HTTP API serving daily maze scenes
//!
//! Every GET path other than `/health` is treated as an image request and
//! answered with the scene JSON for that path. Paths that do not name an
//! image get the not-found scene with a 404 status.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use daily_maze::{build_scene, Clock, Scene};

pub mod config;

pub use config::ServerConfig;

/// Shared, read-only request context
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

// API Handlers

/// GET /health
/// Health check endpoint
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "daily-maze-api"
    }))
}

/// GET /{path}
/// Scene for an image path such as `/dswi.webp`
async fn scene(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let path = req.path();
    let now = state.clock.now();
    tracing::info!("Received scene request for path: {}", path);

    let scene = build_scene(path, now);
    if let Scene::Won(card) = &scene {
        tracing::info!("Maze {} solved in {} moves", card.maze_number, card.moves);
    }

    if scene.is_not_found() {
        tracing::info!("No image at path: {}", path);
        return HttpResponse::NotFound().json(scene);
    }
    HttpResponse::Ok().json(scene)
}

/// Register the API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/{tail:.*}", web::get().to(scene));
}
