use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

/// Raw JSON request body. Missing content type, malformed JSON and oversized bodies
/// keep axum's status code but answer with `{"errors": [...]}`.
#[derive(Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!(status = %rejection.status(), "request body rejected");
                Err(AppError::BadBody {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })
            }
        }
    }
}
