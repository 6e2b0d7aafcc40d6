use crate::Error;
use async_openai::error::OpenAIError;
use serde::Serialize;
use std::{error::Error as _, fmt};

pub const EMPTY_REPLY_FALLBACK: &str = "Desculpe, não consegui analisar sua pergunta no momento.";
pub const FAILURE_FALLBACK: &str =
    "Ocorreu um erro ao consultar o assistente inteligente. Tente novamente mais tarde.";

/// Why a remote call failed. Only logged and reported; the user always
/// sees [`FAILURE_FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Timeout,
    Authentication,
    RateLimited,
    MalformedResponse,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "failure", rename_all = "snake_case")]
pub enum ReplyOutcome {
    Answered,
    Empty,
    Failed(FailureKind),
}

/// Text to show the user, plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    text: String,
    outcome: ReplyOutcome,
}

impl AssistantReply {
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: ReplyOutcome::Answered,
        }
    }

    pub fn empty() -> Self {
        Self {
            text: EMPTY_REPLY_FALLBACK.to_string(),
            outcome: ReplyOutcome::Empty,
        }
    }

    pub fn failed(kind: FailureKind) -> Self {
        Self {
            text: FAILURE_FALLBACK.to_string(),
            outcome: ReplyOutcome::Failed(kind),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn outcome(&self) -> ReplyOutcome {
        self.outcome
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for AssistantReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Authentication => "authentication",
            Self::RateLimited => "rate_limited",
            Self::MalformedResponse => "malformed_response",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl FailureKind {
    pub fn classify(error: &Error) -> Self {
        match error {
            Error::Network(e) => Self::from_reqwest(e),
            Error::OpenAi(e) => Self::from_openai(e),
            Error::Serialization(_) => Self::MalformedResponse,
            Error::Llm(msg) => Self::from_message(msg),
            _ => Self::Other,
        }
    }

    fn from_openai(error: &OpenAIError) -> Self {
        match error {
            OpenAIError::Reqwest(e) => Self::from_reqwest(e),
            OpenAIError::JSONDeserialize(..) => Self::MalformedResponse,
            OpenAIError::ApiError(api) => Self::from_message(&format!("{api:?}")),
            _ => Self::Other,
        }
    }

    fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = error.status() {
            return match status.as_u16() {
                401 | 403 => Self::Authentication,
                429 => Self::RateLimited,
                _ => Self::Other,
            };
        }
        if error.is_decode() {
            return Self::MalformedResponse;
        }
        if error.is_connect() || error.is_request() || error.source().is_some() {
            return Self::Network;
        }
        Self::Other
    }

    fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();

        if mentions(&message, &["timed out", "timeout", "deadline"]) {
            Self::Timeout
        } else if mentions(
            &message,
            &["rate limit", "rate_limit", "quota", "resource_exhausted", "429"],
        ) {
            Self::RateLimited
        } else if mentions(
            &message,
            &[
                "api key",
                "api_key",
                "unauthorized",
                "unauthenticated",
                "permission",
                "401",
                "403",
            ],
        ) {
            Self::Authentication
        } else {
            Self::Other
        }
    }
}

fn mentions(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
