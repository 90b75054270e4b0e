//! Catalog service access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use turbo_commerce::catalog::{Product, ProductsPage};
use turbo_commerce::search::ProductQuery;
use turbo_commerce::ProductId;
use turbo_data::{FetchClient, FetchError};

/// Default catalog service.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Read access to the remote product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the products for a query key.
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, FetchError>;

    /// Fetch a single product by id.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError>;
}

/// Catalog backed by a dummyjson-compatible REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Create a catalog client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_client(FetchClient::new().with_base_url(base_url))
    }

    /// Wrap a preconfigured fetch client.
    pub fn from_client(client: FetchClient) -> Self {
        Self {
            client: client.with_default_header("Accept", "application/json"),
        }
    }

    /// Apply a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// Full URL a query resolves to.
    pub fn url_for(&self, query: &ProductQuery) -> String {
        self.client.resolve_url(&query.path())
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, FetchError> {
        let page: ProductsPage = self
            .client
            .get(query.path())
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(page.products)
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.client
            .get(format!("/products/{}", id))
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// In-memory catalog that mimics the listing and search endpoints.
///
/// Records every path it is asked for and can be switched into a failing
/// mode.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    failing: AtomicBool,
    requests: Mutex<Vec<String>>,
}

impl InMemoryCatalog {
    /// Create a catalog serving the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    /// Make every subsequent request fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Paths requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn record(&self, path: String) -> Result<(), FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path);

        if self.failing.load(Ordering::SeqCst) {
            Err(FetchError::RequestError("catalog unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn matches(product: &Product, term: &str) -> bool {
        let term = term.to_lowercase();
        product.title.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term)
            || product
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(&term))
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, FetchError> {
        self.record(query.path())?;

        if query.is_search() {
            return Ok(self
                .products
                .iter()
                .filter(|p| Self::matches(p, query.search()))
                .cloned()
                .collect());
        }

        let skip = usize::try_from(query.skip()).unwrap_or(usize::MAX);
        Ok(self
            .products
            .iter()
            .skip(skip)
            .take(query.page_size() as usize)
            .cloned()
            .collect())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.record(format!("/products/{}", id))?;

        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::HttpError {
                status: 404,
                message: format!("Product with id '{}' not found", id),
            })
    }
}
