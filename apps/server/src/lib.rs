pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words_core::{
    Clock, Dictionary, FileStore, KeyValueStore, ProgressStore, ReviewService, SystemClock,
};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProgressStore>,
    pub review: Arc<ReviewService>,
    pub dictionary: Arc<Dictionary>,
    pub backup_dir: PathBuf,
    /// Serialises load-modify-save sequences within this process.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        dictionary: Dictionary,
        backup_dir: PathBuf,
    ) -> Self {
        Self {
            store: Arc::new(ProgressStore::new(kv, clock.clone())),
            review: Arc::new(ReviewService::new(clock)),
            dictionary: Arc::new(dictionary),
            backup_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Build the API router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Progress routes
        .route("/api/progress", get(routes::data::progress))
        .route("/api/daily-reset", post(routes::data::daily_reset))
        // Study routes
        .route("/api/tasks/today", get(routes::study::today_tasks))
        .route("/api/review/due", get(routes::study::due_words))
        .route("/api/review", post(routes::study::review))
        // Chapter routes
        .route("/api/chapters", get(routes::chapters::list))
        .route("/api/chapters/advance", post(routes::chapters::advance))
        .route("/api/chapters/:id/completed", get(routes::chapters::completed))
        // Backup routes
        .route("/api/data/export", get(routes::data::export))
        .route("/api/data/backup", post(routes::data::backup))
        .route("/api/data/import", post(routes::data::import))
        .route("/api/data", delete(routes::data::clear))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading dictionary from {}", config.data_dir.display());
    let dictionary = Dictionary::load(&config.data_dir)?;

    tracing::info!("Opening progress store at {}", config.store_dir.display());
    let kv = FileStore::open(&config.store_dir)?;

    let state = AppState::new(
        Arc::new(kv),
        Arc::new(SystemClock),
        dictionary,
        config.backup_dir.clone(),
    );

    let app = router(state);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
