//! Product types as served by the catalog API.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the remote catalog.
///
/// Optional fields are passed through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Customer reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<String>,
}

impl Product {
    /// Create a product with only the fields the cart cares about.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            thumbnail: String::new(),
            category: String::new(),
            description: String::new(),
            rating: 0.0,
            stock: 0,
            reviews: Vec::new(),
            brand: None,
            discount_percentage: None,
            availability_status: None,
            sku: None,
            weight: None,
            dimensions: None,
            warranty_information: None,
            return_policy: None,
            shipping_information: None,
        }
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = url.into();
        self
    }

    /// Number of reviews attached to the product.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Detail page path for this product.
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }

    /// Whether any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer_name: String,
    pub rating: f64,
    pub comment: String,
    /// ISO-8601 timestamp, kept as served.
    pub date: String,
}

/// Physical dimensions of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Envelope returned by listing and search endpoints.
///
/// Only the `products` array is consumed; counts are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
}
