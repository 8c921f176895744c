//! Pizza API: restaurants, pizzas and the prices restaurants charge for them, over HTTP/JSON.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use seed::seed_if_empty;
pub use state::AppState;
pub use store::{connect, memory_pool};
