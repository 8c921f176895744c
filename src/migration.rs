//! Schema DDL for restaurants, pizzas and the restaurant_pizzas join table.
//! Every statement is idempotent, so this runs on each start-up.

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[(&str, &str)] = &[
    (
        "restaurants",
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            address TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "restaurant_pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pizza_id INTEGER NOT NULL REFERENCES pizzas(id),
            restaurant_id INTEGER NOT NULL REFERENCES restaurants(id),
            price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
];

/// Create the tables (parents before the join table) and their indexes.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = %name, "table ensured");
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
