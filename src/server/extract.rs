use super::{handlers::HandlerError, types::ErrorResponse};
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Drop-in replacement for `Json<T>` whose rejections use the same
/// `{"error": ...}` body as every other failure of the API.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                warn!("Request body rejected: {}", rejection.body_text());
                (
                    rejection.status(),
                    Json(ErrorResponse {
                        error: rejection.body_text(),
                    }),
                )
            })?;

        Ok(ApiJson(value))
    }
}
