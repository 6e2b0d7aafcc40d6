use crate::{
    assistant::{ProductContext, ReplyOutcome},
    chat::ChatMessage,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub product: ProductContext,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub outcome: ReplyOutcome,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub product: ProductContext,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub session_id: String,
    pub reply: ChatMessage,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
