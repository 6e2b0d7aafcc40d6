use super::types::ChatMessage;
use crate::{
    Result,
    assistant::{AssistantService, ProductContext, Question},
};
use tracing::debug;

/// Transcript of one chat widget about one product.
///
/// `send` borrows the session mutably across the remote call, so a session
/// has at most one question in flight and replies land in submission order.
#[derive(Debug, Clone)]
pub struct ChatSession {
    product: ProductContext,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(product: ProductContext) -> Self {
        let greeting = ChatMessage::assistant(greeting_for(&product));
        Self {
            product,
            messages: vec![greeting],
        }
    }

    pub fn product(&self) -> &ProductContext {
        &self.product
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's input and the assistant's reply. Blank input is
    /// rejected and leaves the transcript untouched.
    ///
    /// Both messages are appended only once the reply is in, so a call that
    /// is dropped mid-flight leaves no unanswered question behind.
    pub async fn send(&mut self, assistant: &AssistantService, input: &str) -> Result<&ChatMessage> {
        let question = Question::new(input)?;
        let asked = ChatMessage::user(input);

        let reply = assistant.answer_question(&question, &self.product).await;
        debug!(
            "Chat reply for '{}' with outcome {:?}",
            self.product.title,
            reply.outcome()
        );

        self.messages.push(asked);
        self.messages.push(ChatMessage::assistant(reply.into_text()));
        Ok(&self.messages[self.messages.len() - 1])
    }
}

fn greeting_for(product: &ProductContext) -> String {
    let short_title = product
        .title
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Olá! Sou a IA do MercadoClone. Tem alguma dúvida sobre o {short_title}...?")
}
