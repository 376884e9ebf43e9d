//! SQLite Repository Implementation
//!
//! Mutations against one record are single statements, so concurrent
//! requests touching the same id cannot interleave inside a read-modify-
//! write. Absent ids show up as `rows_affected == 0`.

use sqlx::SqlitePool;

use crate::domain::entity::{Car, StockStatus};
use crate::domain::repository::CarRepository;
use crate::error::{InventoryError, InventoryResult};

/// SQLite-backed car repository
#[derive(Clone)]
pub struct SqliteCarRepository {
    pool: SqlitePool,
}

impl SqliteCarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CarRepository for SqliteCarRepository {
    async fn list_all(&self) -> InventoryResult<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, brand, origin, stock
            FROM cars
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CarRow::into_car).collect())
    }

    async fn create(&self, brand: &str, origin: &str) -> InventoryResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO cars (brand, origin, stock)
            VALUES ($1, $2, $3)
            RETURNING id, brand, origin, stock
            "#,
        )
        .bind(brand)
        .bind(origin)
        .bind(StockStatus::InStock.code())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_car())
    }

    async fn delete(&self, id: i64) -> InventoryResult<()> {
        let affected = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(InventoryError::NotFound);
        }

        Ok(())
    }

    async fn toggle_stock(&self, id: i64) -> InventoryResult<()> {
        // One atomic read-modify-write; no window for interleaving
        let affected = sqlx::query(
            r#"
            UPDATE cars
            SET stock = CASE stock WHEN 1 THEN 0 ELSE 1 END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(InventoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CarRow {
    id: i64,
    brand: String,
    origin: String,
    stock: i64,
}

impl CarRow {
    fn into_car(self) -> Car {
        Car {
            id: self.id,
            brand: self.brand,
            origin: self.origin,
            stock: StockStatus::from_code(self.stock),
        }
    }
}
