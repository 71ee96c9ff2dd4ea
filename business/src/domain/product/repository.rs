use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, code: i64) -> Result<Option<Product>, RepositoryError>;
    /// Inserts when `product.code` is `None`, overwrites the matching row
    /// otherwise. Returns the persisted state with the code filled in.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete_by_id(&self, code: i64) -> Result<(), RepositoryError>;
}
