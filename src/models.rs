//! Row types for the three tables and the JSON shapes the API returns.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// A pizza offered at a restaurant at a given price.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub price: i64,
}

/// Restaurant with the pizzas it offers, as returned by `GET /restaurants/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<Pizza>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, pizzas: Vec<Pizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

/// Validated association ready for insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub price: i64,
}

/// Request body of `POST /restaurant_pizzas`, for the OpenAPI document. The handler reads raw JSON.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}
