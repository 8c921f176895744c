//! OpenAPI document served at `/api-docs/openapi.json`.

use crate::error::{ErrorBody, ErrorsBody};
use crate::handlers;
use crate::models::{CreateRestaurantPizzaRequest, Pizza, Restaurant, RestaurantDetail};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::pizza::list_pizzas,
        handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        Restaurant,
        RestaurantDetail,
        Pizza,
        CreateRestaurantPizzaRequest,
        ErrorBody,
        ErrorsBody,
    )),
    tags(
        (name = "restaurants", description = "Restaurants and the pizzas they offer"),
        (name = "pizzas", description = "Pizza catalogue"),
        (name = "restaurant_pizzas", description = "Pizza prices per restaurant"),
    )
)]
pub struct ApiDoc;
