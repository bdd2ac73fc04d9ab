mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let directory = match services::directory::Directory::load(&config.directory_path) {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!(error = %e, "student directory unavailable");
            std::process::exit(1);
        }
    };
    tracing::info!(students = directory.len(), path = %config.directory_path.display(), "student directory loaded");

    let port = config.port;
    let state = state::AppState::new(config, directory);

    // Spawn background session cleanup.
    let _purge = services::session::spawn_purge_task(state.sessions.clone());

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "student portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
