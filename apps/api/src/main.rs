mod config;
mod db;
mod errors;
mod exercises;
mod llm_client;
mod progression;
mod routes;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::exercises::generator::GeminiExerciseGenerator;
use crate::llm_client::LlmClient;
use crate::progression::store::ProgressStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::view::ViewController;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TechComm API v{}", env!("CARGO_PKG_VERSION"));

    // Load persisted progress (absent slot → level 1 defaults)
    let db = create_pool(&config.database_url).await?;
    let store = ProgressStore::new(db);
    let user = store.load().await?;

    // Initialize LLM client and exercise generator
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let generator = Arc::new(GeminiExerciseGenerator::new(
        llm,
        config.native_language.clone(),
    ));
    info!("Learner native language: {}", config.native_language);

    let state = AppState::new(ViewController::new(user), store, generator);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
