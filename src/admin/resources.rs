//! Resource endpoints of the Admin REST API.
//!
//! Each operation is a thin wrapper over [`AdminClient::request`] with a
//! fixed verb and path. Create and update calls wrap their payload as
//! `{"<resource>": ...}`; list and search calls send their parameters as a
//! query string.

use serde_json::Value;

use crate::admin::client::AdminClient;
use crate::admin::errors::AdminError;
use crate::admin::payload::{wrap_payload, wrap_payload_with_id};
use crate::clients::HttpMethod;

impl AdminClient {
    /// `GET products/count.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn products_count(&self) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "products/count.json", None)
            .await
    }

    /// `GET products.json` with `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails or `params` is not an object.
    pub async fn products(&self, params: Value) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "products.json", Some(params))
            .await
    }

    /// `GET products/{id}.json`, returning the `product` member.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::MissingKey`] if the response has no `product`
    /// member, or another [`AdminError`] if the request fails.
    pub async fn product(&self, id: u64) -> Result<Value, AdminError> {
        let mut body = self
            .request(HttpMethod::Get, &format!("products/{id}.json"), None)
            .await?;

        body.get_mut("product")
            .map(Value::take)
            .ok_or_else(|| AdminError::MissingKey {
                key: "product".to_string(),
            })
    }

    /// `POST products.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn create_product(&self, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Post,
            "products.json",
            Some(wrap_payload("product", data)),
        )
        .await
    }

    /// `PUT products/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn update_product(&self, id: u64, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Put,
            &format!("products/{id}.json"),
            Some(wrap_payload("product", data)),
        )
        .await
    }

    /// `DELETE products/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn delete_product(&self, id: u64) -> Result<Value, AdminError> {
        self.request(HttpMethod::Delete, &format!("products/{id}.json"), None)
            .await
    }

    /// `GET products.json` filtered by `search` (e.g. `{"title": "Hat"}`).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails or `search` is not an object.
    pub async fn search_products(&self, search: Value) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "products.json", Some(search))
            .await
    }

    /// `PUT variants/{id}.json`; `id` is also written into the variant body.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn update_variant(&self, id: u64, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Put,
            &format!("variants/{id}.json"),
            Some(wrap_payload_with_id("variant", id, data)),
        )
        .await
    }

    /// `POST products/{product_id}/variants.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn create_variant(&self, product_id: u64, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Post,
            &format!("products/{product_id}/variants.json"),
            Some(wrap_payload("variant", data)),
        )
        .await
    }

    /// `DELETE products/{product_id}/variants/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn delete_variant(&self, product_id: u64, id: u64) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Delete,
            &format!("products/{product_id}/variants/{id}.json"),
            None,
        )
        .await
    }

    /// `GET webhooks.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn webhooks(&self) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "webhooks.json", None).await
    }

    /// `POST webhooks.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn create_webhook(&self, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Post,
            "webhooks.json",
            Some(wrap_payload("webhook", data)),
        )
        .await
    }

    /// `PUT webhooks/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn update_webhook(&self, id: u64, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Put,
            &format!("webhooks/{id}.json"),
            Some(wrap_payload("webhook", data)),
        )
        .await
    }

    /// `DELETE webhooks/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn delete_webhook(&self, id: u64) -> Result<Value, AdminError> {
        self.request(HttpMethod::Delete, &format!("webhooks/{id}.json"), None)
            .await
    }

    /// `GET customers.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn customers(&self) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "customers.json", None).await
    }

    /// `POST orders.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn create_order(&self, data: Value) -> Result<Value, AdminError> {
        self.request(
            HttpMethod::Post,
            "orders.json",
            Some(wrap_payload("order", data)),
        )
        .await
    }

    /// `GET orders.json` with `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails or `params` is not an object.
    pub async fn orders(&self, params: Value) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "orders.json", Some(params))
            .await
    }

    /// `GET orders/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn order(&self, id: u64) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, &format!("orders/{id}.json"), None)
            .await
    }

    /// `GET shop.json`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] if the request fails.
    pub async fn shop(&self) -> Result<Value, AdminError> {
        self.request(HttpMethod::Get, "shop.json", None).await
    }
}
