use std::sync::Arc;

use anyhow::{Context, Result};
use archai_core::config::LayeredConfig;
use archai_store::MemoryProjectStore;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archai_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archai_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();

    let mut pipeline_config = LayeredConfig::with_defaults();
    if let Some(path) = &api_config.config_path {
        pipeline_config = pipeline_config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }
    let pipeline_config = pipeline_config.load_from_env();

    tracing::info!(
        port = api_config.port,
        primary_model = %pipeline_config.primary_model.value,
        fallback_model = %pipeline_config.fallback_model.value,
        layout_count = pipeline_config.layout_count.value,
        "Starting ArchAI API server"
    );

    tracing::info!("Using in-memory project storage");
    let store = Arc::new(MemoryProjectStore::new());
    let state = Arc::new(AppState::from_config(store, &pipeline_config));

    if state.generator.provider_names().is_empty() {
        tracing::warn!("No generation providers configured; set GEMINI_API_KEY or OPENAI_API_KEY");
    }

    let app = create_router(state)
        .layer(cors_layer(&api_config)?)
        .layer(TraceLayer::new_for_http());

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(origins = ?api_config.cors_origins, "CORS enabled");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn cors_layer(config: &ApiConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}
