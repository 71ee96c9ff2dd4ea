use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::SaveMode;

pub struct RegisterOrUpdateProductParams {
    pub code: Option<i64>,
    pub name: String,
    pub brand: String,
    pub mode: SaveMode,
}

#[async_trait]
pub trait RegisterOrUpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RegisterOrUpdateProductParams,
    ) -> Result<Product, ProductError>;
}
