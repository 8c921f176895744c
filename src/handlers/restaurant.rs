//! Restaurant handlers: list, read with pizzas, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::RestaurantId;
use crate::models::{Restaurant, RestaurantDetail};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/restaurants",
    responses((status = 200, description = "All restaurants", body = Vec<Restaurant>)),
    tag = "restaurants"
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<Restaurant>>, AppError> {
    Ok(Json(RestaurantService::list(&state.pool).await?))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    RestaurantId(id): RestaurantId,
) -> Result<Json<RestaurantDetail>, AppError> {
    match RestaurantService::read_with_pizzas(&state.pool, id).await? {
        Some(detail) => Ok(Json(detail)),
        None => {
            tracing::warn!(restaurant_id = id, "restaurant not found");
            Err(AppError::restaurant_not_found())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its restaurant pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
        (status = 500, description = "Delete rolled back", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    RestaurantId(id): RestaurantId,
) -> Result<StatusCode, AppError> {
    RestaurantService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
