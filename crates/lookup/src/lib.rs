//! # Larder Lookup Crate
//!
//! A thin client for the open food-product database that backs barcode
//! scanning. Lookups are keyed by normalized barcode and cached for the
//! lifetime of the client, so a code is fetched at most once per session.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use larder_config::LookupConfig;
use larder_scan::{normalize, validation};
use larder_session::Product;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid lookup response: {0}")]
    Response(#[from] serde_json::Error),
    #[error("no product found for barcode {0}")]
    NotFound(String),
}

/// A product record as returned by the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Normalized barcode the record was fetched under
    #[serde(default)]
    pub code: String,
    /// Product name
    #[serde(default, rename = "product_name")]
    pub name: Option<String>,
    /// Brand names, comma separated
    #[serde(default, rename = "brands")]
    pub brand: Option<String>,
    /// Package quantity label (e.g. "500 g")
    #[serde(default)]
    pub quantity: Option<String>,
    /// Product photo URL
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CatalogProduct {
    /// Convert a catalog record into a session product for the given
    /// household and inventory, carrying the normalized barcode along.
    pub fn into_product(
        self,
        household_id: Option<String>,
        inventory_id: Option<String>,
    ) -> Product {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Unknown product {}", self.code));

        let mut product = Product::new(name, household_id, inventory_id);
        product.brand = self.brand;
        product.unit = self.quantity;
        product.barcode = Some(self.code);
        product
    }
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    #[serde(default)]
    status: i64,
    #[serde(default)]
    product: Option<CatalogProduct>,
}

/// Client for the open food-product database, caching by normalized barcode
pub struct ProductLookup {
    client: Client,
    base_url: String,
    cache: HashMap<String, CatalogProduct>,
}

impl ProductLookup {
    /// Build a client from configuration
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.request_timeout_seconds));

        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            cache: HashMap::new(),
        })
    }

    /// Fetch the catalog record for a scanned barcode.
    ///
    /// The raw code is normalized first; a cached record is returned without
    /// touching the network. A response that carries no product fails with
    /// [`LookupError::NotFound`].
    pub async fn fetch(&mut self, raw_barcode: &str) -> Result<CatalogProduct, LookupError> {
        let code = normalize(raw_barcode);

        if let Some(hit) = self.cache.get(&code) {
            debug!(%code, "lookup served from cache");
            return Ok(hit.clone());
        }

        if !validation::is_plausible_retail_code(&code) {
            warn!(%code, "barcode does not look like a retail code, trying lookup anyway");
        }

        let url = product_url(&self.base_url, &code);
        debug!(%code, %url, "fetching product from catalog");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let mut record = parse_product_body(&body, &code)?;
        if record.code.is_empty() {
            record.code = code.clone();
        }

        self.cache.insert(code, record.clone());
        Ok(record)
    }

    /// A previously fetched record, if any
    pub fn cached(&self, raw_barcode: &str) -> Option<&CatalogProduct> {
        self.cache.get(&normalize(raw_barcode))
    }

    /// Seed the cache with a known record, e.g. from products already held
    /// in the session, so re-scanning them never hits the network.
    pub fn prime(&mut self, record: CatalogProduct) {
        self.cache.insert(record.code.clone(), record);
    }
}

/// Build the catalog URL for a normalized barcode
fn product_url(base_url: &str, code: &str) -> String {
    format!("{}/api/v2/product/{code}.json", base_url.trim_end_matches('/'))
}

/// Decode a catalog response body for `code`
fn parse_product_body(body: &str, code: &str) -> Result<CatalogProduct, LookupError> {
    let envelope: ProductEnvelope = serde_json::from_str(body)?;

    match envelope.product {
        Some(product) if envelope.status == 1 => Ok(product),
        _ => Err(LookupError::NotFound(code.to_string())),
    }
}
