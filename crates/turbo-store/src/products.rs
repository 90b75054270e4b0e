//! Product query store.

use turbo_commerce::catalog::Product;
use turbo_commerce::search::{ProductQuery, DEFAULT_PAGE_SIZE};
use turbo_data::FetchError;

use crate::catalog::CatalogApi;

/// Product store settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Products per page for unfiltered listing.
    pub page_size: u32,
    /// Drop fetch results whose ticket is no longer the latest issued one.
    pub discard_stale_responses: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            discard_stale_responses: true,
        }
    }
}

/// State transitions accepted by the product store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Jump to a page. Page 0 is treated as 1.
    SetPage(u32),
    /// Advance one page.
    NextPage,
    /// Go back one page; no-op on page 1.
    PreviousPage,
    /// Commit a search term and return to page 1.
    SetSearchTerm(String),
    /// Clear the search term, keeping the page.
    ResetSearch,
}

/// Handle for an issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonic sequence number, starting at 1.
    pub seq: u64,
    /// Query key the fetch was issued for.
    pub query: ProductQuery,
}

/// What happened to a resolved fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Results replaced the item list.
    Fulfilled { count: usize },
    /// The fetch failed; the item list was kept.
    Rejected(FetchError),
    /// A newer fetch was issued meanwhile; the result was dropped.
    Discarded { seq: u64 },
}

impl FetchOutcome {
    /// Whether the outcome changed the item list.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, FetchOutcome::Fulfilled { .. })
    }
}

/// Query state for the remote catalog.
///
/// `items` always reflects the most recently committed fetch. A fetch in
/// flight never clears it.
#[derive(Debug, Clone)]
pub struct ProductStore {
    config: StoreConfig,
    current_page: u32,
    search_term: String,
    is_loading: bool,
    items: Vec<Product>,
    last_error: Option<FetchError>,
    latest_seq: u64,
    last_issued: Option<ProductQuery>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ProductStore {
    /// Create an empty store on page 1 with no search term.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            current_page: 1,
            search_term: String::new(),
            is_loading: false,
            items: Vec::new(),
            last_error: None,
            latest_seq: 0,
            last_issued: None,
        }
    }

    /// Apply a state transition.
    pub fn dispatch(&mut self, action: ProductAction) {
        match action {
            ProductAction::SetPage(page) => self.current_page = page.max(1),
            ProductAction::NextPage => self.current_page = self.current_page.saturating_add(1),
            ProductAction::PreviousPage => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                }
            }
            ProductAction::SetSearchTerm(term) => {
                self.search_term = term.trim().to_string();
                self.current_page = 1;
            }
            ProductAction::ResetSearch => self.search_term.clear(),
        }
        tracing::trace!(
            page = self.current_page,
            search = %self.search_term,
            "product state updated"
        );
    }

    /// The current query key.
    pub fn query(&self) -> ProductQuery {
        ProductQuery::new(self.current_page, &self.search_term)
            .with_page_size(self.config.page_size)
    }

    /// Whether the current key differs from the last one fetched.
    pub fn needs_fetch(&self) -> bool {
        self.last_issued.as_ref() != Some(&self.query())
    }

    /// Mark a fetch for the current key as started.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        let query = self.query();
        self.last_issued = Some(query.clone());
        self.is_loading = true;

        tracing::debug!(seq = self.latest_seq, path = %query.path(), "fetch issued");
        FetchTicket {
            seq: self.latest_seq,
            query,
        }
    }

    /// Commit the result of a fetch.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> FetchOutcome {
        if self.config.discard_stale_responses && ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding stale fetch result"
            );
            return FetchOutcome::Discarded { seq: ticket.seq };
        }

        self.is_loading = false;
        match result {
            Ok(products) => {
                let count = products.len();
                self.items = products;
                self.last_error = None;
                tracing::debug!(seq = ticket.seq, count, "fetch fulfilled");
                FetchOutcome::Fulfilled { count }
            }
            Err(err) => {
                tracing::warn!(
                    seq = ticket.seq,
                    path = %ticket.query.path(),
                    error = %err,
                    "fetch failed"
                );
                self.last_error = Some(err.clone());
                FetchOutcome::Rejected(err)
            }
        }
    }

    /// Fetch the current key if it changed since the last fetch.
    pub async fn sync<C: CatalogApi + ?Sized>(&mut self, catalog: &C) -> Option<FetchOutcome> {
        if !self.needs_fetch() {
            return None;
        }
        Some(self.refresh(catalog).await)
    }

    /// Fetch the current key unconditionally.
    pub async fn refresh<C: CatalogApi + ?Sized>(&mut self, catalog: &C) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = catalog.fetch_products(&ticket.query).await;
        self.resolve(ticket, result)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Products from the most recently committed fetch.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Error from the last committed fetch, if it failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}
