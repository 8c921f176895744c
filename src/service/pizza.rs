use crate::error::AppError;
use crate::models::{NewPizza, Pizza};
use sqlx::{SqliteConnection, SqlitePool};

pub struct PizzaService;

impl PizzaService {
    /// All pizzas ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql).fetch_all(pool).await?)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn create(pool: &SqlitePool, new: &NewPizza) -> Result<Pizza, AppError> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, new).await
    }

    /// Insert on an existing connection or transaction.
    pub async fn insert(conn: &mut SqliteConnection, new: &NewPizza) -> Result<Pizza, AppError> {
        let sql = "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients";
        tracing::debug!(sql = %sql, name = %new.name, "query (tx)");
        Ok(sqlx::query_as::<_, Pizza>(sql)
            .bind(&new.name)
            .bind(&new.ingredients)
            .fetch_one(&mut *conn)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    fn pizza(name: &str, ingredients: &str) -> NewPizza {
        NewPizza {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let pool = memory_pool().await.unwrap();
        let first = PizzaService::create(&pool, &pizza("Emma", "Dough, Tomato Sauce, Cheese"))
            .await
            .unwrap();
        let second = PizzaService::create(&pool, &pizza("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"))
            .await
            .unwrap();

        let all = PizzaService::list(&pool).await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn read_missing_is_none() {
        let pool = memory_pool().await.unwrap();
        assert!(PizzaService::read(&pool, 42).await.unwrap().is_none());
    }
}
