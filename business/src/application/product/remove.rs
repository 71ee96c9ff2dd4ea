use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError> {
        // The code must be present and strictly positive before any lookup.
        let code = match params.code {
            Some(code) if code > 0 => code,
            _ => return Err(ProductError::InvalidCode),
        };

        self.logger.info(&format!("Removing product: {}", code));

        // Verify product exists before deleting
        let product = self
            .repository
            .find_by_id(code)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.repository.delete_by_id(code).await?;

        self.logger.info(&format!("Product removed: {}", code));
        Ok(product)
    }
}
