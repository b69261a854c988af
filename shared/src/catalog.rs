//! Product catalog: category list, filtering and the card view model.

use serde::{Deserialize, Serialize};

use crate::locale::Labels;

/// Read-only catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    /// Image path relative to the page
    pub image: String,
}

/// Catalog file shape: `{ "products": [...], "categories": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// One entry in the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Empty for "all categories"
    pub value: String,
    pub label: String,
}

/// Everything a product card needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub image: String,
    pub image_alt: String,
    pub button_label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl ProductCatalog {
    /// Build a catalog. When `categories` is absent or empty the unique set
    /// is derived from the products, in first-seen order.
    pub fn new(products: Vec<Product>, categories: Option<Vec<String>>) -> Self {
        let categories = match categories {
            Some(categories) if !categories.is_empty() => categories,
            _ => derive_categories(&products),
        };
        Self { products, categories }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_options(&self, labels: &Labels) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            value: String::new(),
            label: labels.all_categories.clone(),
        })
        .chain(self.categories.iter().map(|category| CategoryOption {
            value: category.clone(),
            label: category.clone(),
        }))
        .collect()
    }

    /// Products in `category`; the empty filter matches everything
    pub fn filter(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_empty() || p.category == category)
            .collect()
    }

    pub fn product_cards(&self, category: &str, labels: &Labels) -> Vec<ProductCardView> {
        self.filter(category)
            .into_iter()
            .map(|product| ProductCardView {
                id: product.id.clone(),
                name: product.name.clone(),
                description: product.description.clone(),
                price_label: labels.format_price(product.price),
                image: product.image.clone(),
                image_alt: product.name.clone(),
                button_label: labels.add_to_cart.clone(),
            })
            .collect()
    }
}

impl From<CatalogData> for ProductCatalog {
    fn from(data: CatalogData) -> Self {
        Self::new(data.products, data.categories)
    }
}

fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
