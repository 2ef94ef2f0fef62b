//! Product catalog client.
//!
//! Thin HTTP wrapper for `GET /product?product_id=<id>`. Response parsing is
//! split into a pure function so wire handling stays testable without a
//! network.

use std::time::Duration;

use crate::foundation::error::{Door2dError, Door2dResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// A raw catalog image item as returned by the product endpoint.
///
/// `assignment` must match the `"<sash>-<part>"` taxonomy grammar to
/// participate in slot matching; non-conforming strings are ignored upstream,
/// never fatal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageAsset {
    /// Taxonomy tag, e.g. `"two-sash-frame"`.
    pub assignment: String,
    /// Absolute URL of the hosted SVG document.
    pub image_url: String,
    /// Upload timestamp as reported by the catalog. Carried verbatim; slot
    /// resolution never consults it (determinism forbids wall-clock input).
    #[serde(default)]
    pub created_at: String,
}

/// Catalog response for a single product.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ProductResponse {
    /// Echoed product id.
    pub product_id: u64,
    /// Hosted images for this product; absent on the wire means empty.
    #[serde(default)]
    pub product_images: Vec<ImageAsset>,
}

/// HTTP client for the product catalog.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client for the catalog at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Door2dResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Door2dError::catalog(format!("build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch a product and its tagged images.
    pub async fn fetch_product(&self, product_id: u64) -> Door2dResult<ProductResponse> {
        let url = format!("{}/product", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("product_id", product_id)])
            .send()
            .await
            .map_err(|e| Door2dError::catalog(format!("request product {product_id}: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Door2dError::catalog(format!("read product {product_id} body: {e}")))?;

        if !status.is_success() {
            return Err(Door2dError::catalog(format!(
                "product {product_id} returned status {status}: {text}"
            )));
        }

        parse_product_response(&text)
    }
}

/// Parse a product response body.
pub fn parse_product_response(body: &str) -> Door2dResult<ProductResponse> {
    serde_json::from_str(body).map_err(|e| Door2dError::serde(format!("product response: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
