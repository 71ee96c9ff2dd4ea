use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT code, name, brand FROM products ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, code: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT code, name, brand FROM products WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = match product.code {
            // New record: let the BIGSERIAL assign the code.
            None => sqlx::query_as::<_, ProductEntity>(
                "INSERT INTO products (name, brand) VALUES ($1, $2) RETURNING code, name, brand",
            )
            .bind(&product.name)
            .bind(&product.brand)
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?,
            // Known code: full overwrite of the matching row.
            Some(code) => sqlx::query_as::<_, ProductEntity>(
                r#"INSERT INTO products (code, name, brand)
                VALUES ($1, $2, $3)
                ON CONFLICT (code) DO UPDATE SET
                    name = EXCLUDED.name,
                    brand = EXCLUDED.brand
                RETURNING code, name, brand"#,
            )
            .bind(code)
            .bind(&product.name)
            .bind(&product.brand)
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?,
        };

        Ok(entity.into_domain())
    }

    async fn delete_by_id(&self, code: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
