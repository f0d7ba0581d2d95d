//! Hosted document store client
//!
//! REST client for the hosted document database, vendor-agnostic: products
//! live in a `products` collection, per-user documents under `users/{id}`.
//! Timeouts and transport behavior are the HTTP client's defaults.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    domain::{
        products::models::{NewProduct, Product, ProductId, ProductUpdate},
        sessions::models::{NewUserDocument, UserDocument, UserId},
    },
    store::{DocumentStore, ProductQuery, StoreError, UserDocumentField},
};

use async_trait::async_trait;

/// Configuration for connecting to the hosted document store.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// Store base address, e.g. `"https://store.example.com"`.
    pub base_url: String,

    /// API key sent as a bearer token on every request.
    pub api_key: String,
}

/// HTTP client for the hosted document store.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    config: HttpStoreConfig,
    http: Client,
}

impl HttpDocumentStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: HttpStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.config.api_key)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn get_products(&self, query: ProductQuery) -> Result<Vec<Product>, StoreError> {
        let mut params: Vec<(&str, String)> = vec![
            ("sortField", query.sort_field.as_str().to_string()),
            ("sortOrder", query.sort_order.as_str().to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(category) = query.category {
            params.push(("category", category.as_str().to_string()));
        }

        let response = self
            .http
            .get(self.url("products"))
            .header("Authorization", self.authorization())
            .query(&params)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let parsed: DocumentsResponse<Product> = decode(response).await?;

        debug!(count = parsed.documents.len(), "fetched product records");

        Ok(parsed.documents)
    }

    async fn add_product(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        let response = self
            .http
            .post(self.url("products"))
            .header("Authorization", self.authorization())
            .json(&product)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let parsed: CreatedResponse = decode(response).await?;

        Ok(parsed.id)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.url(&format!("products/{id}")))
            .header("Authorization", self.authorization())
            .json(&update)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(self.url(&format!("products/{id}")))
            .header("Authorization", self.authorization())
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn get_user_document(&self, user: &UserId) -> Result<Option<UserDocument>, StoreError> {
        let response = self
            .http
            .get(self.url(&format!("users/{user}")))
            .header("Authorization", self.authorization())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_success(response).await?;
        let document: UserDocument = decode(response).await?;

        Ok(Some(document))
    }

    async fn create_user_document(
        &self,
        user: &UserId,
        document: NewUserDocument,
    ) -> Result<(), StoreError> {
        let body = json!({
            "displayName": document.display_name,
            "email": document.email,
            "cart": [],
            "wishlist": [],
        });

        let response = self
            .http
            .put(self.url(&format!("users/{user}")))
            .header("Authorization", self.authorization())
            .json(&body)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn set_user_document_field(
        &self,
        user: &UserId,
        field: UserDocumentField,
    ) -> Result<(), StoreError> {
        let body = match &field {
            UserDocumentField::Cart(items) => json!({ "cart": items }),
            UserDocumentField::Wishlist(items) => json!({ "wishlist": items }),
            UserDocumentField::DisplayName(name) => json!({ "displayName": name }),
        };

        debug!(user = %user, field = field.name(), "overwriting user document field");

        let response = self
            .http
            .patch(self.url(&format!("users/{user}")))
            .header("Authorization", self.authorization())
            .json(&body)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }
}

/// Maps a non-success status to the error taxonomy; passes success through.
async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::PermissionDenied),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        _ => {
            let text = response.text().await.unwrap_or_default();

            Err(StoreError::Unexpected(format!(
                "request failed with status {status}: {text}"
            )))
        }
    }
}

/// Decodes a JSON body, reporting a malformed payload as `Unexpected` rather
/// than a transport failure.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response
        .json::<T>()
        .await
        .map_err(|error| StoreError::Unexpected(format!("invalid response body: {error}")))
}

#[derive(Debug, Deserialize)]
struct DocumentsResponse<T> {
    documents: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: ProductId,
}
