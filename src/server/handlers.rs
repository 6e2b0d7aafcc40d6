use super::extract::ApiJson;
use super::types::{
    AskRequest, AskResponse, CreateSessionRequest, ErrorResponse, SendMessageRequest,
    SendMessageResponse, SessionResponse,
};
use crate::{
    Error,
    assistant::{AssistantService, Question},
    chat::SessionStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantService>,
    pub sessions: Arc<SessionStore>,
}

pub type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(e: Error) -> HandlerError {
    let status = match &e {
        Error::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        e if e.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Request rejected: {}", e);
    }

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub async fn ask(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    request.product.validate().map_err(error_response)?;
    let question = Question::new(request.question).map_err(error_response)?;

    info!("Received question about '{}'", request.product.title);

    let reply = state
        .assistant
        .answer_question(&question, &request.product)
        .await;

    Ok(Json(AskResponse {
        outcome: reply.outcome(),
        answer: reply.into_text(),
    }))
}

pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), HandlerError> {
    request.product.validate().map_err(error_response)?;

    let (session_id, session) = state.sessions.create(request.product).await;
    let messages = session.lock().await.messages().to_vec();

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            messages,
        }),
    ))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, HandlerError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .map_err(error_response)?;
    let messages = session.lock().await.messages().to_vec();

    Ok(Json(SessionResponse {
        session_id,
        messages,
    }))
}

pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, HandlerError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .map_err(error_response)?;

    // Held across the remote call so submissions to one session stay in order.
    let mut session = session.lock().await;
    let reply = session
        .send(&state.assistant, &request.input)
        .await
        .map_err(error_response)?
        .clone();

    info!("Answered message in session {}", session_id);

    Ok(Json(SendMessageResponse {
        session_id,
        reply,
        messages: session.messages().to_vec(),
    }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .sessions
        .remove(&session_id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
