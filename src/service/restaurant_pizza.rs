use crate::error::AppError;
use crate::models::{NewRestaurantPizza, Pizza, RestaurantPizza};
use crate::service::validation::{parse_id, validate_price};
use crate::service::{PizzaService, RestaurantService};
use serde_json::Value;
use sqlx::SqlitePool;

pub const PIZZA_NOT_FOUND: &str = "Pizza not found";
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

static MISSING: Value = Value::Null;

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    /// Validate a raw request body and link the pizza to the restaurant.
    ///
    /// Price, pizza and restaurant are all checked before failing, so one response carries every
    /// problem. Returns the linked pizza.
    pub async fn create(pool: &SqlitePool, body: &Value) -> Result<Pizza, AppError> {
        let (new, pizza) = Self::validate(pool, body).await?;
        let row = Self::insert(pool, &new).await?;
        tracing::info!(
            restaurant_pizza_id = row.id,
            restaurant_id = row.restaurant_id,
            pizza_id = row.pizza_id,
            price = row.price,
            "restaurant pizza created"
        );
        Ok(pizza)
    }

    async fn validate(pool: &SqlitePool, body: &Value) -> Result<(NewRestaurantPizza, Pizza), AppError> {
        let field = |name: &str| body.get(name).unwrap_or(&MISSING);
        let mut errors = Vec::new();

        let price = validate_price(field("price")).map_err(|e| errors.push(e)).ok();

        let pizza = match parse_id(field("pizza_id")) {
            Some(id) => PizzaService::read(pool, id).await?,
            None => None,
        };
        if pizza.is_none() {
            errors.push(PIZZA_NOT_FOUND.to_string());
        }

        let restaurant = match parse_id(field("restaurant_id")) {
            Some(id) => RestaurantService::read(pool, id).await?,
            None => None,
        };
        if restaurant.is_none() {
            errors.push(RESTAURANT_NOT_FOUND.to_string());
        }

        match (price, pizza, restaurant) {
            (Some(price), Some(pizza), Some(restaurant)) if errors.is_empty() => Ok((
                NewRestaurantPizza {
                    pizza_id: pizza.id,
                    restaurant_id: restaurant.id,
                    price,
                },
                pizza,
            )),
            _ => {
                tracing::warn!(errors = ?errors, "restaurant pizza rejected");
                Err(AppError::Validation(errors))
            }
        }
    }

    /// Insert in a transaction; any failure rolls back and surfaces as `CreateFailed`.
    async fn insert(pool: &SqlitePool, new: &NewRestaurantPizza) -> Result<RestaurantPizza, AppError> {
        let mut tx = pool.begin().await.map_err(AppError::CreateFailed)?;
        let sql = r#"
            INSERT INTO restaurant_pizzas (pizza_id, restaurant_id, price)
            VALUES (?, ?, ?)
            RETURNING id, pizza_id, restaurant_id, price
        "#;
        tracing::debug!(sql = %sql, params = ?new, "query (tx)");
        let row = sqlx::query_as::<_, RestaurantPizza>(sql)
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .bind(new.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::CreateFailed)?;
        tx.commit().await.map_err(AppError::CreateFailed)?;
        Ok(row)
    }
}
