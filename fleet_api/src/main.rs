mod app;
mod config;
mod dashboard;
mod error;
mod fleet;
mod index;
mod matching;
mod orders;
mod performance;
mod sessions;
mod state;
mod warnings;

use std::sync::Arc;

use axum::serve;
use fleet_core::{
    artifacts::artifact_state::ArtifactState, loader::dataset_loader::load_dataset,
    matching::matching_params::MatchingParams,
};
use tracing::{Level, info};

use crate::{app::build_router, config::ServerConfig, sessions::MatchSessions, state::AppState};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env()?;

    let dataset = load_dataset(&config.data_dir);
    let artifacts = ArtifactState::load(&config.artifacts_path);

    let state = Arc::new(AppState {
        dataset,
        artifacts,
        params: MatchingParams::default(),
        sessions: MatchSessions::default(),
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Fleet dashboard listening on http://{}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}
