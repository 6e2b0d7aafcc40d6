use super::{
    prompt::build_prompt,
    reply::{AssistantReply, FailureKind},
    types::{ProductContext, Question},
};
use crate::{
    Result,
    config::{AssistantConfig, LlmConfig},
    llm::{ChatCompletionRequest, CompletionMessage, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Answers product questions through a remote model.
///
/// Holds no per-call state: every call sends one prompt built from the
/// question and the product alone, so one instance can be shared freely
/// across tasks. It never returns an error; failures become one of the
/// fallback replies.
#[derive(Clone)]
pub struct AssistantService {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    store: AssistantConfig,
}

impl AssistantService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        config: AssistantConfig,
    ) -> Self {
        Self {
            llm_client,
            model: model.into(),
            store: config,
        }
    }

    /// Builds the production client once; call at start-up and share the result.
    pub fn from_config(llm_config: &LlmConfig, config: AssistantConfig) -> Result<Self> {
        let client = OpenAiClient::new(llm_config)?;
        info!(
            "Assistant configured for model {} at {}",
            llm_config.model, llm_config.base_url
        );
        Ok(Self::new(Arc::new(client), llm_config.model.clone(), config))
    }

    pub async fn answer_question(
        &self,
        question: &Question,
        product: &ProductContext,
    ) -> AssistantReply {
        let prompt = build_prompt(&self.store, question, product);
        debug!(
            "Asking assistant about '{}' ({} prompt chars)",
            product.title,
            prompt.chars().count()
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![CompletionMessage::user(prompt)],
            max_tokens: None,
            temperature: None,
        };

        match self.llm_client.create_chat_completion(request).await {
            Ok(response) => match response.text() {
                Some(text) => AssistantReply::answered(text),
                None => {
                    warn!(
                        "Assistant returned no text for '{}' (response {})",
                        product.title, response.id
                    );
                    AssistantReply::empty()
                }
            },
            Err(e) => {
                let kind = FailureKind::classify(&e);
                error!(
                    failure = %kind,
                    "Assistant call failed for '{}': {}",
                    product.title, e
                );
                AssistantReply::failed(kind)
            }
        }
    }
}
