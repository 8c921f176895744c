//! Demo rows for a fresh database.

use crate::error::AppError;
use crate::models::{NewPizza, NewRestaurant};
use crate::service::{PizzaService, RestaurantService};
use sqlx::SqlitePool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const LINKS: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Insert the demo data set when both parent tables are empty. Returns whether anything was written.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, AppError> {
    let (restaurants, pizzas): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM restaurants), (SELECT COUNT(*) FROM pizzas)",
    )
    .fetch_one(pool)
    .await?;
    if restaurants > 0 || pizzas > 0 {
        tracing::debug!(restaurants, pizzas, "store not empty, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let new = NewRestaurant { name: name.to_string(), address: address.to_string() };
        restaurant_ids.push(RestaurantService::insert(&mut tx, &new).await?.id);
    }
    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let new = NewPizza { name: name.to_string(), ingredients: ingredients.to_string() };
        pizza_ids.push(PizzaService::insert(&mut tx, &new).await?.id);
    }
    for &(r, p, price) in LINKS {
        sqlx::query("INSERT INTO restaurant_pizzas (pizza_id, restaurant_id, price) VALUES (?, ?, ?)")
            .bind(pizza_ids[p])
            .bind(restaurant_ids[r])
            .bind(price)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(
        restaurants = RESTAURANTS.len(),
        pizzas = PIZZAS.len(),
        restaurant_pizzas = LINKS.len(),
        "seeded demo data"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    #[tokio::test]
    async fn seeds_once() {
        let pool = memory_pool().await.unwrap();
        assert!(seed_if_empty(&pool).await.unwrap());
        assert!(!seed_if_empty(&pool).await.unwrap());

        assert_eq!(RestaurantService::list(&pool).await.unwrap().len(), 3);
        assert_eq!(PizzaService::list(&pool).await.unwrap().len(), 3);

        let first = RestaurantService::list(&pool).await.unwrap()[0].id;
        let detail = RestaurantService::read_with_pizzas(&pool, first).await.unwrap().unwrap();
        assert_eq!(detail.pizzas.len(), 1);
        assert_eq!(detail.pizzas[0].name, "Emma");
    }
}
