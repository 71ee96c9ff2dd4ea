use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape of the `products` table. The code column is a BIGSERIAL, so a
/// fetched row always carries one.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub code: i64,
    pub name: String,
    pub brand: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.code, self.name, self.brand)
    }
}
