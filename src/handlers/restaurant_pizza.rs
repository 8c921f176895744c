use crate::error::{AppError, ErrorsBody};
use crate::extractors::JsonBody;
use crate::models::{CreateRestaurantPizzaRequest, Pizza};
use crate::service::RestaurantPizzaService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Body is raw JSON; wrongly typed fields come back as validation messages.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 200, description = "Pizza now offered by the restaurant", body = Pizza),
        (status = 400, description = "Validation failed or malformed JSON", body = ErrorsBody),
        (status = 415, description = "Body is not declared as JSON", body = ErrorsBody),
        (status = 500, description = "Insert rolled back", body = ErrorsBody),
    ),
    tag = "restaurant_pizzas"
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Pizza>, AppError> {
    Ok(Json(RestaurantPizzaService::create(&state.pool, &body).await?))
}
