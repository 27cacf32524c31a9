use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects.
///
/// A missing `Content-Type`, an empty body, invalid JSON or a JSON value
/// that `T` refuses (request DTOs accept any object) all yield
/// `T::default()`. Handlers then report the operation's own "missing input"
/// code instead of a generic parse error.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Treating unreadable request body as empty");
                Ok(JsonBody(T::default()))
            }
        }
    }
}
