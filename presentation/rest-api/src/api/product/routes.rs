use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::register_or_update::{
    RegisterOrUpdateProductParams, RegisterOrUpdateProductUseCase,
};
use business::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};
use business::domain::product::value_objects::SaveMode;

use crate::api::error::IntoErrorResponse;
use crate::api::product::dto::{
    ProductResponse, RegisterProductRequest, RemoveConfirmationResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    register_or_update_use_case: Arc<dyn RegisterOrUpdateProductUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        register_or_update_use_case: Arc<dyn RegisterOrUpdateProductUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
    ) -> Self {
        Self {
            register_or_update_use_case,
            remove_use_case,
            list_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for listing, registering, updating, and removing products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in the catalog, in storage order.
    #[oai(path = "/listar", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> ListProductsResponse {
        match self.list_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Register a new product
    ///
    /// Saves a new product; the repository assigns its code.
    #[oai(path = "/cadastrar", method = "post", tag = "ApiTags::Products")]
    async fn register_product(
        &self,
        body: Json<RegisterProductRequest>,
    ) -> RegisterProductResponse {
        let params = RegisterOrUpdateProductParams {
            code: None,
            name: body.0.name,
            brand: body.0.brand,
            mode: SaveMode::Register,
        };

        match self.register_or_update_use_case.execute(params).await {
            Ok(product) => RegisterProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterProductResponse::BadRequest(json),
                    _ => RegisterProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an existing product
    ///
    /// Overwrites the product matching the code in the payload.
    #[oai(path = "/alterar", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, body: Json<UpdateProductRequest>) -> UpdateProductResponse {
        let params = RegisterOrUpdateProductParams {
            code: body.0.code,
            name: body.0.name,
            brand: body.0.brand,
            mode: SaveMode::Update,
        };

        match self.register_or_update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    ///
    /// Deletes the product with the given code.
    #[oai(path = "/remover/:code", method = "delete", tag = "ApiTags::Products")]
    async fn remove_product(&self, code: Path<i64>) -> RemoveProductResponse {
        match self
            .remove_use_case
            .execute(RemoveProductParams { code: Some(code.0) })
            .await
        {
            Ok(product) => RemoveProductResponse::Ok(Json(RemoveConfirmationResponse {
                message: format!("Product {} removed", product.code.unwrap_or(code.0)),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveProductResponse::BadRequest(json),
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<crate::api::error::ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<crate::api::error::ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<crate::api::error::ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<crate::api::error::ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<crate::api::error::ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<crate::api::error::ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<RemoveConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<crate::api::error::ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<crate::api::error::ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<crate::api::error::ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use mockall::mock;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    mock! {
        pub RegisterOrUpdate {}

        #[async_trait]
        impl RegisterOrUpdateProductUseCase for RegisterOrUpdate {
            async fn execute(
                &self,
                params: RegisterOrUpdateProductParams,
            ) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Remove {}

        #[async_trait]
        impl RemoveProductUseCase for Remove {
            async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub List {}

        #[async_trait]
        impl ListProductsUseCase for List {
            async fn execute(&self) -> Result<Vec<Product>, ProductError>;
        }
    }

    fn test_client(
        register_or_update: MockRegisterOrUpdate,
        remove: MockRemove,
        list: MockList,
    ) -> TestClient<Route> {
        let api = ProductApi::new(
            Arc::new(register_or_update),
            Arc::new(remove),
            Arc::new(list),
        );
        let service = OpenApiService::new(api, "Product Catalog API", "0.1.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_list_all_products() {
        let mut list = MockList::new();
        list.expect_execute().returning(|| {
            Ok(vec![
                Product::from_repository(1, "Celular".to_string(), "Marca X".to_string()),
                Product::from_repository(2, "Televisão".to_string(), "Marca Y".to_string()),
            ])
        });

        let cli = test_client(MockRegisterOrUpdate::new(), MockRemove::new(), list);

        let resp = cli.get("/listar").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let products = json.value().array();
        assert_eq!(products.len(), 2);
        assert_eq!(products.get(0).object().get("name").string(), "Celular");
        assert_eq!(products.get(1).object().get("name").string(), "Televisão");
    }

    #[tokio::test]
    async fn should_return_empty_array_when_no_products() {
        let mut list = MockList::new();
        list.expect_execute().returning(|| Ok(vec![]));

        let cli = test_client(MockRegisterOrUpdate::new(), MockRemove::new(), list);

        let resp = cli.get("/listar").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert!(json.value().array().is_empty());
    }

    #[tokio::test]
    async fn should_register_product_with_created_status() {
        let mut register_or_update = MockRegisterOrUpdate::new();
        register_or_update
            .expect_execute()
            .withf(|params| params.mode == SaveMode::Register && params.code.is_none())
            .returning(|params| {
                Ok(Product::from_repository(1, params.name, params.brand))
            });

        let cli = test_client(register_or_update, MockRemove::new(), MockList::new());

        let resp = cli
            .post("/cadastrar")
            .body_json(&serde_json::json!({"name": "Novo Produto", "brand": "Nova Marca"}))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        assert_eq!(json.value().object().get("name").string(), "Novo Produto");
        assert_eq!(json.value().object().get("code").i64(), 1);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_registering_with_empty_name() {
        let mut register_or_update = MockRegisterOrUpdate::new();
        register_or_update
            .expect_execute()
            .returning(|_| Err(ProductError::NameEmpty));

        let cli = test_client(register_or_update, MockRemove::new(), MockList::new());

        let resp = cli
            .post("/cadastrar")
            .body_json(&serde_json::json!({"name": "", "brand": "Marca Válida"}))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        assert_eq!(
            json.value().object().get("message").string(),
            "product.name_empty"
        );
    }

    #[tokio::test]
    async fn should_update_product() {
        let mut register_or_update = MockRegisterOrUpdate::new();
        register_or_update
            .expect_execute()
            .withf(|params| params.mode == SaveMode::Update && params.code == Some(1))
            .returning(|params| {
                Ok(Product::from_repository(1, params.name, params.brand))
            });

        let cli = test_client(register_or_update, MockRemove::new(), MockList::new());

        let resp = cli
            .put("/alterar")
            .body_json(&serde_json::json!({
                "code": 1,
                "name": "Produto Atualizado",
                "brand": "Marca Atualizada"
            }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert_eq!(
            json.value().object().get("name").string(),
            "Produto Atualizado"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_code() {
        let mut register_or_update = MockRegisterOrUpdate::new();
        register_or_update
            .expect_execute()
            .returning(|_| Err(ProductError::NotFound));

        let cli = test_client(register_or_update, MockRemove::new(), MockList::new());

        let resp = cli
            .put("/alterar")
            .body_json(&serde_json::json!({
                "code": 999,
                "name": "Produto Válido",
                "brand": "Marca Válida"
            }))
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        assert_eq!(json.value().object().get("name").string(), "NotFound");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_updating_with_empty_name() {
        let mut register_or_update = MockRegisterOrUpdate::new();
        register_or_update
            .expect_execute()
            .returning(|_| Err(ProductError::NameEmpty));

        let cli = test_client(register_or_update, MockRemove::new(), MockList::new());

        let resp = cli
            .put("/alterar")
            .body_json(&serde_json::json!({"code": 1, "name": "", "brand": "X"}))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_remove_product_with_confirmation() {
        let mut remove = MockRemove::new();
        remove
            .expect_execute()
            .withf(|params| params.code == Some(1))
            .returning(|_| {
                Ok(Product::from_repository(
                    1,
                    "Produto a ser removido".to_string(),
                    "Marca Qualquer".to_string(),
                ))
            });

        let cli = test_client(MockRegisterOrUpdate::new(), remove, MockList::new());

        let resp = cli.delete("/remover/1").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert_eq!(
            json.value().object().get("message").string(),
            "Product 1 removed"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_removing_unknown_code() {
        let mut remove = MockRemove::new();
        remove
            .expect_execute()
            .returning(|_| Err(ProductError::NotFound));

        let cli = test_client(MockRegisterOrUpdate::new(), remove, MockList::new());

        let resp = cli.delete("/remover/999").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_removing_negative_code() {
        let mut remove = MockRemove::new();
        remove
            .expect_execute()
            .withf(|params| params.code == Some(-1))
            .returning(|_| Err(ProductError::InvalidCode));

        let cli = test_client(MockRegisterOrUpdate::new(), remove, MockList::new());

        let resp = cli.delete("/remover/-1").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        assert_eq!(
            json.value().object().get("message").string(),
            "product.invalid_code"
        );
    }
}
