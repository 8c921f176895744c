//! Data access and write-time validation for restaurants, pizzas and their links.

mod pizza;
mod restaurant;
mod restaurant_pizza;
pub mod validation;

pub use pizza::PizzaService;
pub use restaurant::RestaurantService;
pub use restaurant_pizza::{RestaurantPizzaService, PIZZA_NOT_FOUND, RESTAURANT_NOT_FOUND};
