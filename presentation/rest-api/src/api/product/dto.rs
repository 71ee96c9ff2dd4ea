use poem_openapi::Object;

use business::domain::product::model::Product;

/// Payload for registering a new product. The code is never accepted here;
/// the repository assigns it.
#[derive(Debug, Clone, Object)]
pub struct RegisterProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product brand (cannot be empty)
    pub brand: String,
}

/// Payload for updating an existing product. The whole record is overwritten
/// with these fields.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Code of the product to update
    pub code: Option<i64>,
    /// Product name (cannot be empty)
    pub name: String,
    /// Product brand (cannot be empty)
    pub brand: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique code
    pub code: Option<i64>,
    /// Product name
    pub name: String,
    /// Product brand
    pub brand: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            code: product.code,
            name: product.name,
            brand: product.brand,
        }
    }
}

/// Confirmation returned after a successful removal.
#[derive(Debug, Clone, Object)]
pub struct RemoveConfirmationResponse {
    pub message: String,
}
