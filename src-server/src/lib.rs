//! Taskboard Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: HTTP handlers
//! - middleware: artificial latency

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod repository;

use config::ServerConfig;
use domain::{DemoAccount, Task};
use repository::{InMemoryRepository, PatchableRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn PatchableRepository<Task>>,
    pub account: Arc<DemoAccount>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn PatchableRepository<Task>>, account: DemoAccount) -> Self {
        Self {
            tasks,
            account: Arc::new(account),
        }
    }

    /// Empty in-memory store plus the configured demo account.
    pub fn in_memory(config: &ServerConfig) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Task>::new()),
            DemoAccount::new(config.demo_email.clone(), config.demo_password.clone()),
        )
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/health", get(commands::health))
        .route("/tasks", get(commands::list_tasks).post(commands::create_task))
        .route(
            "/tasks/{id}",
            get(commands::get_task)
                .put(commands::update_task)
                .delete(commands::delete_task),
        )
        .route("/auth/login", post(commands::login))
        .route("/auth/logout", post(commands::logout))
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            config.latency,
            middleware::artificial_latency,
        ));

    // Static assets are added after the latency layer so they load at full speed.
    let app = match &config.static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            api.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::in_memory(&config);
    let app = router(state, &config);
    let address = config.socket_addr();

    let listener = TcpListener::bind(address).await?;
    tracing::info!(
        %address,
        latency_ms = config.latency.as_millis() as u64,
        static_dir = ?config.static_dir,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
