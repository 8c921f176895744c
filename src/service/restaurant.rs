use crate::error::AppError;
use crate::models::{NewRestaurant, Pizza, Restaurant, RestaurantDetail};
use crate::service::validation::validate_restaurant_name;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantService;

impl RestaurantService {
    /// All restaurants ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql).fetch_all(pool).await?)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Restaurant>, AppError> {
        let mut conn = pool.acquire().await?;
        Self::find(&mut conn, id).await
    }

    /// Restaurant plus the distinct pizzas linked to it, loaded with one explicit join.
    pub async fn read_with_pizzas(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<RestaurantDetail>, AppError> {
        let mut conn = pool.acquire().await?;
        let Some(restaurant) = Self::find(&mut conn, id).await? else {
            return Ok(None);
        };

        let sql = r#"
            SELECT DISTINCT p.id, p.name, p.ingredients
            FROM pizzas p
            JOIN restaurant_pizzas rp ON rp.pizza_id = p.id
            WHERE rp.restaurant_id = ?
            ORDER BY p.id
        "#;
        tracing::debug!(sql = %sql, id, "query");
        let pizzas = sqlx::query_as::<_, Pizza>(sql)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(Some(RestaurantDetail::new(restaurant, pizzas)))
    }

    /// Validate the name, then insert.
    pub async fn create(pool: &SqlitePool, new: &NewRestaurant) -> Result<Restaurant, AppError> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, new).await
    }

    pub async fn insert(
        conn: &mut SqliteConnection,
        new: &NewRestaurant,
    ) -> Result<Restaurant, AppError> {
        validate_restaurant_name(&new.name).map_err(|e| AppError::Validation(vec![e]))?;
        let sql = "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address";
        tracing::debug!(sql = %sql, name = %new.name, "query (tx)");
        Ok(sqlx::query_as::<_, Restaurant>(sql)
            .bind(&new.name)
            .bind(&new.address)
            .fetch_one(&mut *conn)
            .await?)
    }

    /// Delete the restaurant's join rows and then the restaurant, in one transaction.
    ///
    /// Missing restaurants yield `NotFound`. Any store failure rolls the whole unit back
    /// and yields `DeleteFailed`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        if Self::find(&mut tx, id).await?.is_none() {
            return Err(AppError::restaurant_not_found());
        }

        let removed = Self::delete_cascade(&mut tx, id)
            .await
            .map_err(AppError::DeleteFailed)?;
        tx.commit().await.map_err(AppError::DeleteFailed)?;
        tracing::info!(restaurant_id = id, restaurant_pizzas = removed, "restaurant deleted");
        Ok(())
    }

    /// Returns the number of join rows removed.
    async fn delete_cascade(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
        let sql = "DELETE FROM restaurant_pizzas WHERE restaurant_id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let removed = sqlx::query(sql).bind(id).execute(&mut *conn).await?.rows_affected();

        let sql = "DELETE FROM restaurants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(sql).bind(id).execute(&mut *conn).await?;
        Ok(removed)
    }

    async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPizza;
    use crate::service::PizzaService;
    use crate::store::memory_pool;

    fn restaurant(name: &str) -> NewRestaurant {
        NewRestaurant {
            name: name.into(),
            address: "address 1".into(),
        }
    }

    async fn link(pool: &SqlitePool, restaurant_id: i64, pizza_id: i64, price: i64) {
        sqlx::query("INSERT INTO restaurant_pizzas (pizza_id, restaurant_id, price) VALUES (?, ?, ?)")
            .bind(pizza_id)
            .bind(restaurant_id)
            .bind(price)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_rejects_bad_names_before_writing() {
        let pool = memory_pool().await.unwrap();

        let err = RestaurantService::create(&pool, &restaurant("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == &vec!["Restaurant must have a name".to_string()]));

        let long = "n".repeat(51);
        let err = RestaurantService::create(&pool, &restaurant(&long)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(RestaurantService::list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn names_are_unique() {
        let pool = memory_pool().await.unwrap();
        RestaurantService::create(&pool, &restaurant("Sottocasa")).await.unwrap();
        let err = RestaurantService::create(&pool, &restaurant("Sottocasa")).await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }

    #[tokio::test]
    async fn detail_lists_each_linked_pizza_once() {
        let pool = memory_pool().await.unwrap();
        let r = RestaurantService::create(&pool, &restaurant("Sottocasa")).await.unwrap();
        let other = RestaurantService::create(&pool, &restaurant("PizzArte")).await.unwrap();
        let emma = PizzaService::create(&pool, &NewPizza { name: "Emma".into(), ingredients: "Cheese".into() })
            .await
            .unwrap();
        let geri = PizzaService::create(&pool, &NewPizza { name: "Geri".into(), ingredients: "Pepperoni".into() })
            .await
            .unwrap();
        link(&pool, r.id, geri.id, 5).await;
        link(&pool, r.id, emma.id, 10).await;
        link(&pool, r.id, emma.id, 12).await;
        link(&pool, other.id, geri.id, 7).await;

        let detail = RestaurantService::read_with_pizzas(&pool, r.id).await.unwrap().unwrap();
        assert_eq!(detail.name, "Sottocasa");
        assert_eq!(detail.pizzas, vec![emma, geri]);
    }

    #[tokio::test]
    async fn delete_removes_join_rows_and_restaurant() {
        let pool = memory_pool().await.unwrap();
        let r = RestaurantService::create(&pool, &restaurant("Sottocasa")).await.unwrap();
        let keep = RestaurantService::create(&pool, &restaurant("PizzArte")).await.unwrap();
        let p = PizzaService::create(&pool, &NewPizza { name: "Emma".into(), ingredients: "Cheese".into() })
            .await
            .unwrap();
        link(&pool, r.id, p.id, 5).await;
        link(&pool, r.id, p.id, 6).await;
        link(&pool, keep.id, p.id, 7).await;

        RestaurantService::delete(&pool, r.id).await.unwrap();

        assert!(RestaurantService::read(&pool, r.id).await.unwrap().is_none());
        let (left,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(r.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(left, 0);
        let (others,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(others, 1);
        assert!(PizzaService::read(&pool, p.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn failed_delete_keeps_join_rows() {
        let pool = memory_pool().await.unwrap();
        let r = RestaurantService::create(&pool, &restaurant("Sottocasa")).await.unwrap();
        let p = PizzaService::create(&pool, &NewPizza { name: "Emma".into(), ingredients: "Cheese".into() })
            .await
            .unwrap();
        link(&pool, r.id, p.id, 5).await;
        link(&pool, r.id, p.id, 6).await;
        sqlx::query(
            "CREATE TRIGGER keep_restaurants BEFORE DELETE ON restaurants \
             BEGIN SELECT RAISE(ABORT, 'restaurant is locked'); END",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = RestaurantService::delete(&pool, r.id).await.unwrap_err();
        assert!(matches!(err, AppError::DeleteFailed(_)));

        assert!(RestaurantService::read(&pool, r.id).await.unwrap().is_some());
        let (left,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(r.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(left, 2);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = memory_pool().await.unwrap();
        let err = RestaurantService::delete(&pool, 7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
