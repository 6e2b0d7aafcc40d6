use super::types::{ProductContext, Question};
use crate::config::AssistantConfig;

/// Builds the single-turn grounding prompt for one question about one product.
pub fn build_prompt(store: &AssistantConfig, question: &Question, product: &ProductContext) -> String {
    let likeness = store
        .similar_to
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!(" (similar ao {name})"))
        .unwrap_or_default();

    format!(
        "Você é um assistente de compras especialista do {store_name}{likeness}.\n\
         O usuário está interessado no seguinte produto:\n\
         Título: {title}\n\
         Preço: R$ {price}\n\
         Descrição: {description}\n\
         Avaliação: {rating}/5 baseada em {reviews} reviews.\n\
         \n\
         O usuário perguntou: \"{question}\"\n\
         \n\
         Responda de forma útil, concisa (máximo 3 parágrafos curtos) e persuasiva, \
         destacando os pontos positivos do produto mas sendo honesto.\n\
         Se a pergunta for irrelevante ao produto, peça para focar no item. \
         Use formatação Markdown simples se necessário.\n",
        store_name = store.store_name,
        title = product.title,
        price = product.price,
        description = product.description,
        rating = product.rating,
        reviews = product.reviews,
        question = question.as_str(),
    )
}
