use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the product a question is about. Extra storefront fields
/// (`id`, `image`, `category`, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductContext {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
}

impl ProductContext {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            description: String::new(),
            rating: 0.0,
            reviews: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_product("title must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::invalid_product(format!(
                "price must be a non-negative amount, got {}",
                self.price
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::invalid_product(format!(
                "rating must be between 0 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}

/// User question, guaranteed non-blank. The text is kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Question {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl TryFrom<&str> for Question {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drill() -> ProductContext {
        ProductContext::new("Furadeira X", 199.9)
            .with_description("Furadeira de impacto")
            .with_rating(4.5, 120)
    }

    #[test]
    fn test_question_rejects_blank_text() {
        assert!(matches!(Question::new(""), Err(Error::EmptyQuestion)));
        assert!(matches!(Question::new(" \t\n"), Err(Error::EmptyQuestion)));
    }

    #[test]
    fn test_question_keeps_text_verbatim() {
        let question = Question::try_from("  Serve para uso externo? ").unwrap();
        assert_eq!(question.as_str(), "  Serve para uso externo? ");
        assert_eq!(question.to_string(), "  Serve para uso externo? ");
    }

    #[test]
    fn test_valid_product() {
        assert!(drill().validate().is_ok());
        assert!(ProductContext::new("Caneca", 0.0).validate().is_ok());
    }

    #[test]
    fn test_product_requires_title() {
        let err = ProductContext::new("  ", 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidProduct(_)));
    }

    #[test]
    fn test_product_rejects_bad_price_and_rating() {
        assert!(ProductContext::new("Caneca", -1.0).validate().is_err());
        assert!(ProductContext::new("Caneca", f64::NAN).validate().is_err());
        assert!(
            ProductContext::new("Caneca", 10.0)
                .with_rating(5.5, 3)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_product_deserializes_storefront_record() {
        let json = r#"{
            "id": "1",
            "title": "Furadeira X",
            "price": 199.9,
            "originalPrice": 249.9,
            "image": "https://example.com/x.jpg",
            "freeShipping": true,
            "rating": 4.5,
            "reviews": 120,
            "description": "Furadeira de impacto",
            "category": "ferramentas"
        }"#;

        let product: ProductContext = serde_json::from_str(json).unwrap();
        assert_eq!(product, drill());
    }

    #[test]
    fn test_product_optional_fields_default() {
        let product: ProductContext =
            serde_json::from_str(r#"{"title": "Caneca", "price": 25}"#).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.reviews, 0);
    }
}
