pub mod extract;
pub mod handlers;
pub mod types;

use crate::{
    Result,
    assistant::AssistantService,
    chat::SessionStore,
    config::Config,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/assistant", post(handlers::ask))
        .route("/chat/sessions", post(handlers::create_session))
        .route(
            "/chat/sessions/:id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/chat/sessions/:id/messages", post(handlers::send_message))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = AssistantService::from_config(&config.llm, config.assistant.clone())?;

    let sessions = Arc::new(SessionStore::new(Duration::from_secs(
        config.server.session_idle_secs,
    )));
    // Sweep at a fraction of the idle timeout so abandoned sessions go away
    // even when no new session is created.
    let sweep_every = (sessions.idle_timeout() / 4).max(Duration::from_secs(1));
    sessions.spawn_reaper(sweep_every);

    let app_state = AppState {
        assistant: Arc::new(assistant),
        sessions,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
