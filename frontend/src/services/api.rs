use anyhow::{anyhow, Context, Result};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{AvailabilityData, CatalogData, WidgetConfig};

/// Client for the static JSON data files served next to the page
#[derive(Clone, PartialEq)]
pub struct DataClient {
    availability_url: String,
    products_url: String,
}

impl DataClient {
    pub fn new(availability_url: String, products_url: String) -> Self {
        Self {
            availability_url,
            products_url,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.availability_url.clone(), config.products_url.clone())
    }

    /// Load the list of bookable dates. A single attempt, no retry.
    pub async fn fetch_availability(&self) -> Result<AvailabilityData> {
        self.get_json(&self.availability_url).await
    }

    /// Load the product catalog. A single attempt, no retry.
    pub async fn fetch_catalog(&self) -> Result<CatalogData> {
        self.get_json(&self.products_url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.ok() {
            return Err(anyhow!("Fetching {} returned status {}", url, response.status()));
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {}", url))
    }
}
