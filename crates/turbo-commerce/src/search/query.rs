//! Catalog query key.

use serde::{Deserialize, Serialize};

/// Products per page for unfiltered listing.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The (page, search term) pair that decides which fetch is authoritative.
///
/// Listing and searching are exclusive modes of the catalog service: a
/// non-empty term returns every match and the page number is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProductQuery")]
pub struct ProductQuery {
    page: u32,
    search: String,
    page_size: u32,
}

/// Wire shape, normalized through the same rules as [`ProductQuery::new`].
#[derive(Deserialize)]
struct RawProductQuery {
    page: u32,
    #[serde(default)]
    search: String,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl From<RawProductQuery> for ProductQuery {
    fn from(raw: RawProductQuery) -> Self {
        Self::new(raw.page, raw.search).with_page_size(raw.page_size)
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new(1, "")
    }
}

impl ProductQuery {
    /// Create a query. Page is clamped to at least 1 and the term is trimmed.
    pub fn new(page: u32, search: impl AsRef<str>) -> Self {
        Self {
            page: page.max(1),
            search: search.as_ref().trim().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Search term; empty means no filter.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Items per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Whether this query hits the search endpoint.
    pub fn is_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Offset for the listing endpoint.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Catalog path, relative to the service base URL.
    pub fn path(&self) -> String {
        if self.is_search() {
            format!("/products/search?q={}", urlencoding_encode(&self.search))
        } else {
            format!("/products?limit={}&skip={}", self.page_size, self.skip())
        }
    }
}

fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_path() {
        assert_eq!(ProductQuery::new(1, "").path(), "/products?limit=10&skip=0");
        assert_eq!(ProductQuery::new(2, "").path(), "/products?limit=10&skip=10");
    }

    #[test]
    fn test_search_ignores_page() {
        let query = ProductQuery::new(4, "phone");
        assert!(query.is_search());
        assert_eq!(query.path(), "/products/search?q=phone");
    }

    #[test]
    fn test_page_clamped() {
        assert_eq!(ProductQuery::new(0, "").page(), 1);
        assert_eq!(ProductQuery::new(0, "").with_page_size(0).page_size(), 1);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let query: ProductQuery =
            serde_json::from_str(r#"{"page":0,"search":"  lamp ","page_size":0}"#).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.search(), "lamp");
        assert_eq!(query.page_size(), 1);

        let query: ProductQuery =
            serde_json::from_str(r#"{"page":0,"search":"","page_size":10}"#).unwrap();
        assert_eq!(query.skip(), 0);
        assert_eq!(query.path(), "/products?limit=10&skip=0");
    }

    #[test]
    fn test_whitespace_term_is_no_filter() {
        let query = ProductQuery::new(3, "   ");
        assert!(!query.is_search());
        assert_eq!(query.path(), "/products?limit=10&skip=20");
    }

    #[test]
    fn test_search_term_encoded() {
        assert_eq!(
            ProductQuery::new(1, " desk lamp ").path(),
            "/products/search?q=desk+lamp"
        );
        assert_eq!(
            ProductQuery::new(1, "crème&co").path(),
            "/products/search?q=cr%C3%A8me%26co"
        );
    }

    #[test]
    fn test_custom_page_size() {
        let query = ProductQuery::new(3, "").with_page_size(24);
        assert_eq!(query.skip(), 48);
        assert_eq!(query.path(), "/products?limit=24&skip=48");
    }
}
