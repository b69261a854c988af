//! Widget configuration.
//!
//! Every field has a default, so a page only needs to embed the values it
//! wants to change, e.g. `{"cartKey": "demo-cart", "labels": {...}}`.

use serde::{Deserialize, Serialize};

use crate::calendar::AvailabilitySet;
use crate::catalog::ProductCatalog;
use crate::fallback::{fallback_availability, fallback_catalog};
use crate::locale::Labels;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid widget configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Storage key for {0} cannot be empty")]
    EmptyStorageKey(&'static str),
}

/// What a widget shows when its data file cannot be loaded
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FallbackPolicy {
    /// Use the built-in data from [`crate::fallback`]
    #[default]
    StaticData,
    /// Render with no data (an all-unavailable calendar, an empty catalog)
    Empty,
}

impl FallbackPolicy {
    pub fn availability(self) -> AvailabilitySet {
        match self {
            FallbackPolicy::StaticData => fallback_availability(),
            FallbackPolicy::Empty => AvailabilitySet::default(),
        }
    }

    pub fn catalog(self) -> ProductCatalog {
        match self {
            FallbackPolicy::StaticData => fallback_catalog(),
            FallbackPolicy::Empty => ProductCatalog::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub availability_url: String,
    pub products_url: String,
    /// Storage key holding the booking list
    pub bookings_key: String,
    /// Storage key holding the cart lines
    pub cart_key: String,
    pub availability_fallback: FallbackPolicy,
    pub catalog_fallback: FallbackPolicy,
    /// Options offered in the booking form's service selector
    pub services: Vec<String>,
    pub labels: Labels,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            availability_url: "data/availability.json".to_string(),
            products_url: "data/products.json".to_string(),
            bookings_key: "bookings".to_string(),
            cart_key: "cart".to_string(),
            availability_fallback: FallbackPolicy::StaticData,
            catalog_fallback: FallbackPolicy::StaticData,
            services: vec![
                "PC-Reparatur".to_string(),
                "Netzwerk & WLAN".to_string(),
                "Datenrettung".to_string(),
                "IT-Beratung".to_string(),
            ],
            labels: Labels::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a partial configuration, filling gaps from [`Default`]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bookings_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("bookings"));
        }
        if self.cart_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("cart"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.availability_url, "data/availability.json");
        assert_eq!(config.products_url, "data/products.json");
        assert_eq!(config.bookings_key, "bookings");
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.availability_fallback, FallbackPolicy::StaticData);
        assert!(!config.services.is_empty());
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_json(
            r#"{"cartKey":"demo-cart","availabilityFallback":"empty","services":["Support"]}"#,
        )
        .unwrap();
        assert_eq!(config.cart_key, "demo-cart");
        assert_eq!(config.bookings_key, "bookings");
        assert_eq!(config.availability_fallback, FallbackPolicy::Empty);
        assert_eq!(config.catalog_fallback, FallbackPolicy::StaticData);
        assert_eq!(config.services, vec!["Support".to_string()]);
        assert_eq!(config.labels, Labels::german());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            WidgetConfig::from_json("{not json"),
            Err(ConfigError::InvalidJson(_))
        ));
        assert!(matches!(
            WidgetConfig::from_json(r#"{"bookingsKey":"  "}"#),
            Err(ConfigError::EmptyStorageKey("bookings"))
        ));
    }

    #[test]
    fn test_fallback_policy_uses_camel_case_like_other_keys() {
        let config = WidgetConfig::from_json(
            r#"{"availabilityFallback":"staticData","catalogFallback":"empty"}"#,
        )
        .unwrap();
        assert_eq!(config.availability_fallback, FallbackPolicy::StaticData);
        assert_eq!(config.catalog_fallback, FallbackPolicy::Empty);

        assert!(WidgetConfig::from_json(r#"{"availabilityFallback":"static_data"}"#).is_err());
        assert_eq!(
            serde_json::to_string(&FallbackPolicy::StaticData).unwrap(),
            r#""staticData""#
        );
    }

    #[test]
    fn test_fallback_policy() {
        assert!(!FallbackPolicy::StaticData.availability().is_empty());
        assert!(FallbackPolicy::Empty.availability().is_empty());
        assert!(!FallbackPolicy::StaticData.catalog().products().is_empty());
        assert!(FallbackPolicy::Empty.catalog().products().is_empty());
    }
}
