use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::register_or_update::{
    RegisterOrUpdateProductParams, RegisterOrUpdateProductUseCase,
};
use crate::domain::product::value_objects::SaveMode;

pub struct RegisterOrUpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterOrUpdateProductUseCase for RegisterOrUpdateProductUseCaseImpl {
    async fn execute(
        &self,
        params: RegisterOrUpdateProductParams,
    ) -> Result<Product, ProductError> {
        // Field validation happens before any repository access, in both modes.
        let product = Product::new(params.code, params.name, params.brand)?;

        match params.mode {
            SaveMode::Register => {
                self.logger
                    .info(&format!("Registering product: {}", product.name));

                // Registration saves unconditionally. A payload carrying a code
                // that already exists overwrites that row; callers are expected
                // to omit the code when registering.
                let saved = self.repository.save(&product).await?;

                self.logger
                    .info(&format!("Product registered: {}", saved.name));
                Ok(saved)
            }
            SaveMode::Update => {
                let code = product.code.ok_or(ProductError::InvalidCode)?;

                self.logger.info(&format!("Updating product: {}", code));

                // Verify the target exists; the save is a full overwrite.
                if self.repository.find_by_id(code).await?.is_none() {
                    return Err(ProductError::NotFound);
                }

                let saved = self.repository.save(&product).await?;

                self.logger.info(&format!("Product updated: {}", code));
                Ok(saved)
            }
        }
    }
}
