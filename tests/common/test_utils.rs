use super::mocks::MockLlmClient;
use mercado_assistant::{
    assistant::{AssistantService, ProductContext},
    config::AssistantConfig,
};
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_MODEL: &str = "gemini-2.5-flash";

/// The drill used throughout the assistant scenarios
pub fn create_test_product() -> ProductContext {
    ProductContext::new("Furadeira X", 199.9)
        .with_description("Furadeira de impacto")
        .with_rating(4.5, 120)
}

/// Same product as the storefront sends it, extra fields included
pub fn create_test_product_json() -> Value {
    json!({
        "id": "MLB-001",
        "title": "Furadeira X",
        "price": 199.9,
        "originalPrice": 259.9,
        "image": "https://example.com/furadeira.jpg",
        "freeShipping": true,
        "fullDelivery": false,
        "rating": 4.5,
        "reviews": 120,
        "installments": 10,
        "description": "Furadeira de impacto",
        "category": "ferramentas",
        "sold": 532
    })
}

/// Service wired to a mock, returning the mock so tests can inspect requests
pub fn create_test_service(mock: MockLlmClient) -> (AssistantService, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let service = AssistantService::new(mock.clone(), TEST_MODEL, AssistantConfig::default());
    (service, mock)
}
