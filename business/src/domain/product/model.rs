use super::errors::ProductError;

/// Catalog entry. `code` is assigned by the repository on first save, so it
/// is `None` for payloads that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub code: Option<i64>,
    pub name: String,
    pub brand: String,
}

impl Product {
    pub fn new(code: Option<i64>, name: String, brand: String) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if brand.trim().is_empty() {
            return Err(ProductError::BrandEmpty);
        }

        Ok(Self { code, name, brand })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(code: i64, name: String, brand: String) -> Self {
        Self {
            code: Some(code),
            name,
            brand,
        }
    }
}
