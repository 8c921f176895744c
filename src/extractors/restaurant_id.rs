//! `{id}` path segment of `/restaurants/{id}`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Restaurant id from the path. Any segment that cannot name a stored row
/// (not an integer, out of i64 range) is rejected as "Restaurant not found".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestaurantId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RestaurantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::restaurant_not_found())?;
        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(RestaurantId(id)),
            Err(_) => {
                tracing::warn!(id = %raw, "unparseable restaurant id");
                Err(AppError::restaurant_not_found())
            }
        }
    }
}
