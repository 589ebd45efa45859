use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use daily_maze_server::{configure, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting daily maze API server");

    let config = ServerConfig::from_env().context("loading server configuration")?;
    if let Some(at) = config.fixed_time {
        tracing::info!("Clock pinned to {}", at.to_rfc3339());
    }

    let state = web::Data::new(AppState::new(config.clock()));

    tracing::info!("Binding to {}", config.bind);

    let mut server = HttpServer::new(move || {
        // Scenes are public and read-only; any origin may fetch them
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"]);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind(config.bind)
        .with_context(|| format!("binding to {}", config.bind))?
        .run()
        .await
        .context("server failed")
}
