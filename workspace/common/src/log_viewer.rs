//! State machine behind the inventory log viewer.
//!
//! The viewer owns three concerns: loading the product catalog once,
//! tracking the selected product and page, and fetching log pages. Every
//! action that starts a log fetch bumps a generation counter and records the
//! resulting [`LogRequest`] as pending. A response is committed only if it
//! answers the pending request; anything else is a stale answer to a
//! superseded selection or page and is dropped.

use tracing::{debug, warn};

use crate::endpoints;
use crate::inventory_log::{InventoryLogEntry, InventoryLogPage, Pagination};
use crate::product::{filter_products, Product};

/// Lifecycle of one fetch concern.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A log page fetch, tagged with the generation it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogRequest {
    pub product_id: i64,
    pub page: u32,
    pub generation: u64,
}

impl LogRequest {
    pub fn endpoint(&self) -> String {
        endpoints::inventory_logs(self.product_id, self.page)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogViewerAction {
    CatalogRequested,
    CatalogLoaded(Vec<Product>),
    CatalogFailed(String),
    SetFilter(String),
    /// `None` clears the selection
    SelectProduct(Option<i64>),
    GoToPage(u32),
    NextPage,
    PreviousPage,
    Refresh,
    LogsLoaded { request: LogRequest, page: InventoryLogPage },
    LogsFailed { request: LogRequest, error: String },
}

/// What [`LogViewerState::apply`] did with an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The action had no effect in the current state
    Ignored,
    /// A response for a request that is no longer pending
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogViewerState {
    catalog: Vec<Product>,
    catalog_status: LoadStatus,
    filter: String,
    selected: Option<i64>,
    page: u32,
    entries: Vec<InventoryLogEntry>,
    pagination: Option<Pagination>,
    logs_status: LoadStatus,
    generation: u64,
    pending: Option<LogRequest>,
}

impl Default for LogViewerState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            catalog_status: LoadStatus::Idle,
            filter: String::new(),
            selected: None,
            page: 1,
            entries: Vec::new(),
            pagination: None,
            logs_status: LoadStatus::Idle,
            generation: 0,
            pending: None,
        }
    }
}

impl LogViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn catalog_status(&self) -> &LoadStatus {
        &self.catalog_status
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Catalog entries matching the current filter text.
    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.catalog, &self.filter)
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected?;
        self.catalog.iter().find(|p| p.id == id)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages).unwrap_or(1)
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn entries(&self) -> &[InventoryLogEntry] {
        &self.entries
    }

    pub fn logs_status(&self) -> &LoadStatus {
        &self.logs_status
    }

    /// Failure message when a fetch failed and there are no earlier entries
    /// left to show in its place.
    pub fn unrecovered_error(&self) -> Option<&str> {
        if self.entries.is_empty() {
            self.logs_status.error()
        } else {
            None
        }
    }

    /// The request whose response is currently awaited, if any.
    pub fn pending_request(&self) -> Option<LogRequest> {
        self.pending
    }

    pub fn can_go_previous(&self) -> bool {
        self.selected.is_some() && self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.selected.is_some() && self.page < self.total_pages()
    }

    pub fn apply(&mut self, action: LogViewerAction) -> ApplyOutcome {
        match action {
            LogViewerAction::CatalogRequested => {
                if self.catalog_status != LoadStatus::Idle {
                    return ApplyOutcome::Ignored;
                }
                self.catalog_status = LoadStatus::Loading;
                ApplyOutcome::Applied
            }
            LogViewerAction::CatalogLoaded(products) => {
                if self.catalog_status == LoadStatus::Loaded {
                    return ApplyOutcome::Ignored;
                }
                debug!(count = products.len(), "Product catalog loaded");
                self.catalog = products;
                self.catalog_status = LoadStatus::Loaded;
                ApplyOutcome::Applied
            }
            LogViewerAction::CatalogFailed(error) => {
                if self.catalog_status == LoadStatus::Loaded {
                    return ApplyOutcome::Ignored;
                }
                warn!(%error, "Product catalog failed to load");
                self.catalog.clear();
                self.catalog_status = LoadStatus::Failed(error);
                ApplyOutcome::Applied
            }
            LogViewerAction::SetFilter(filter) => {
                if self.filter == filter {
                    return ApplyOutcome::Ignored;
                }
                self.filter = filter;
                ApplyOutcome::Applied
            }
            LogViewerAction::SelectProduct(product_id) => self.select(product_id),
            LogViewerAction::GoToPage(page) => self.go_to_page(page),
            LogViewerAction::NextPage => {
                if !self.can_go_next() {
                    return ApplyOutcome::Ignored;
                }
                self.go_to_page(self.page + 1)
            }
            LogViewerAction::PreviousPage => {
                if !self.can_go_previous() {
                    return ApplyOutcome::Ignored;
                }
                self.go_to_page(self.page - 1)
            }
            LogViewerAction::Refresh => {
                if self.selected.is_none() {
                    return ApplyOutcome::Ignored;
                }
                self.start_fetch();
                ApplyOutcome::Applied
            }
            LogViewerAction::LogsLoaded { request, page } => {
                if !self.is_pending(&request) {
                    return ApplyOutcome::Stale;
                }
                let pagination = page.pagination.normalized();
                debug!(
                    product_id = request.product_id,
                    page = pagination.current_page,
                    entries = page.logs.len(),
                    "Inventory log page committed"
                );
                self.entries = page.logs;
                self.page = pagination.current_page;
                self.pagination = Some(pagination);
                self.logs_status = LoadStatus::Loaded;
                self.pending = None;
                ApplyOutcome::Applied
            }
            LogViewerAction::LogsFailed { request, error } => {
                if !self.is_pending(&request) {
                    return ApplyOutcome::Stale;
                }
                // The previous entries stay on screen; point the page back at them.
                self.page = self.pagination.map(|p| p.current_page).unwrap_or(1);
                self.logs_status = LoadStatus::Failed(error);
                self.pending = None;
                ApplyOutcome::Applied
            }
        }
    }

    fn select(&mut self, product_id: Option<i64>) -> ApplyOutcome {
        if self.selected == product_id {
            return ApplyOutcome::Ignored;
        }

        self.selected = product_id;
        self.page = 1;
        self.entries.clear();
        self.pagination = None;

        match product_id {
            Some(_) => self.start_fetch(),
            None => {
                // Orphan any in-flight response for the old product.
                self.generation += 1;
                self.pending = None;
                self.logs_status = LoadStatus::Idle;
            }
        }
        ApplyOutcome::Applied
    }

    fn go_to_page(&mut self, page: u32) -> ApplyOutcome {
        if self.selected.is_none() || page < 1 || page > self.total_pages() || page == self.page {
            return ApplyOutcome::Ignored;
        }
        self.page = page;
        self.start_fetch();
        ApplyOutcome::Applied
    }

    fn start_fetch(&mut self) {
        let Some(product_id) = self.selected else {
            return;
        };
        self.generation += 1;
        self.pending = Some(LogRequest {
            product_id,
            page: self.page,
            generation: self.generation,
        });
        self.logs_status = LoadStatus::Loading;
    }

    fn is_pending(&self, request: &LogRequest) -> bool {
        if self.pending.as_ref() == Some(request) {
            return true;
        }
        debug!(
            product_id = request.product_id,
            page = request.page,
            generation = request.generation,
            current_generation = self.generation,
            "Dropping stale inventory log response"
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            sku: "W1".to_string(),
            category: "Tools".to_string(),
            stock: 30,
            min_stock: 5,
        }
    }

    fn gadget() -> Product {
        Product {
            id: 2,
            name: "Gadget".to_string(),
            sku: "G2".to_string(),
            category: "Tools".to_string(),
            stock: 1,
            min_stock: 5,
        }
    }

    fn entry(id: i64, product_id: i64, before: i64, after: i64) -> InventoryLogEntry {
        InventoryLogEntry {
            id,
            product_id,
            product_name: None,
            product_sku: None,
            log_type: Some("sale".to_string()),
            quantity: (after - before).abs(),
            balance_before: before,
            balance_after: after,
            reference: None,
            reason: None,
            condition: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single(),
        }
    }

    fn page(logs: Vec<InventoryLogEntry>, current_page: u32, total_pages: u32) -> InventoryLogPage {
        InventoryLogPage {
            logs,
            pagination: Pagination {
                current_page,
                total_pages,
                total_items: u64::from(total_pages) * 20,
                items_per_page: 20,
            },
        }
    }

    fn loaded_viewer() -> LogViewerState {
        let mut state = LogViewerState::new();
        state.apply(LogViewerAction::CatalogRequested);
        state.apply(LogViewerAction::CatalogLoaded(vec![widget(), gadget()]));
        state
    }

    #[test]
    fn test_catalog_lifecycle() {
        let mut state = LogViewerState::new();
        assert_eq!(state.catalog_status(), &LoadStatus::Idle);
        assert_eq!(state.apply(LogViewerAction::CatalogRequested), ApplyOutcome::Applied);
        assert!(state.catalog_status().is_loading());
        assert_eq!(state.apply(LogViewerAction::CatalogRequested), ApplyOutcome::Ignored);

        state.apply(LogViewerAction::CatalogLoaded(vec![widget()]));
        assert_eq!(state.catalog_status(), &LoadStatus::Loaded);
        assert_eq!(state.catalog().len(), 1);
    }

    #[test]
    fn test_catalog_failure_leaves_empty_catalog() {
        let mut state = LogViewerState::new();
        state.apply(LogViewerAction::CatalogRequested);
        state.apply(LogViewerAction::CatalogFailed("HTTP error: 500".to_string()));
        assert!(state.catalog().is_empty());
        assert_eq!(state.catalog_status().error(), Some("HTTP error: 500"));
        assert!(state.filtered_products().is_empty());
    }

    #[test]
    fn test_select_then_paginate() {
        let mut state = LogViewerState::new();
        state.apply(LogViewerAction::CatalogRequested);
        state.apply(LogViewerAction::CatalogLoaded(vec![widget()]));

        assert_eq!(state.apply(LogViewerAction::SelectProduct(Some(1))), ApplyOutcome::Applied);
        let request = state.pending_request().expect("selection should start a fetch");
        assert_eq!(request.product_id, 1);
        assert_eq!(request.page, 1);
        assert_eq!(request.endpoint(), "/inventory-logs?product_id=1&page=1&per_page=20");

        let outcome = state.apply(LogViewerAction::LogsLoaded {
            request,
            page: page(vec![entry(1, 1, 50, 30)], 1, 3),
        });
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(state.can_go_next());
        assert!(!state.can_go_previous());
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.selected_product().map(|p| p.name.as_str()), Some("Widget"));
    }

    #[test]
    fn test_reselecting_same_product_is_noop() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let first = state.pending_request();
        assert_eq!(state.apply(LogViewerAction::SelectProduct(Some(1))), ApplyOutcome::Ignored);
        assert_eq!(state.pending_request(), first);
    }

    #[test]
    fn test_stale_response_after_reselection_is_dropped() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let for_widget = state.pending_request().unwrap();

        state.apply(LogViewerAction::SelectProduct(Some(2)));
        let for_gadget = state.pending_request().unwrap();
        assert_ne!(for_widget, for_gadget);

        // gadget answers first, widget's late answer must not win
        state.apply(LogViewerAction::LogsLoaded {
            request: for_gadget,
            page: page(vec![entry(7, 2, 1, 4)], 1, 1),
        });
        let late = state.apply(LogViewerAction::LogsLoaded {
            request: for_widget,
            page: page(vec![entry(1, 1, 50, 30), entry(2, 1, 30, 10)], 1, 5),
        });

        assert_eq!(late, ApplyOutcome::Stale);
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].product_id, 2);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_stale_page_response_is_dropped() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let first = state.pending_request().unwrap();
        state.apply(LogViewerAction::LogsLoaded {
            request: first,
            page: page(vec![entry(1, 1, 50, 30)], 1, 4),
        });

        state.apply(LogViewerAction::NextPage);
        let to_two = state.pending_request().unwrap();
        // the user is faster than the network
        state.apply(LogViewerAction::GoToPage(4));
        let to_four = state.pending_request().unwrap();

        assert_eq!(
            state.apply(LogViewerAction::LogsFailed {
                request: to_two,
                error: "timeout".to_string()
            }),
            ApplyOutcome::Stale
        );
        assert!(state.logs_status().is_loading());

        state.apply(LogViewerAction::LogsLoaded {
            request: to_four,
            page: page(vec![entry(9, 1, 5, 0)], 4, 4),
        });
        assert_eq!(state.page(), 4);
        assert!(!state.can_go_next());
        assert!(state.can_go_previous());
    }

    #[test]
    fn test_failed_page_keeps_previous_entries() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let first = state.pending_request().unwrap();
        state.apply(LogViewerAction::LogsLoaded {
            request: first,
            page: page(vec![entry(1, 1, 50, 30)], 1, 2),
        });

        state.apply(LogViewerAction::NextPage);
        let second = state.pending_request().unwrap();
        assert_eq!(second.page, 2);
        state.apply(LogViewerAction::LogsFailed {
            request: second,
            error: "HTTP error: 502".to_string(),
        });

        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.page(), 1);
        assert_eq!(state.logs_status().error(), Some("HTTP error: 502"));
        assert!(state.unrecovered_error().is_none());
        assert!(state.pending_request().is_none());
    }

    #[test]
    fn test_first_fetch_failure_is_not_an_empty_history() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let request = state.pending_request().unwrap();
        state.apply(LogViewerAction::LogsFailed {
            request,
            error: "HTTP error: 500".to_string(),
        });

        assert!(state.entries().is_empty());
        assert_eq!(state.unrecovered_error(), Some("HTTP error: 500"));

        state.apply(LogViewerAction::Refresh);
        let retry = state.pending_request().unwrap();
        assert!(state.unrecovered_error().is_none());
        state.apply(LogViewerAction::LogsLoaded {
            request: retry,
            page: page(Vec::new(), 1, 1),
        });
        assert!(state.unrecovered_error().is_none());
        assert_eq!(state.logs_status(), &LoadStatus::Loaded);
    }

    #[test]
    fn test_selection_discards_previous_logs() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let request = state.pending_request().unwrap();
        state.apply(LogViewerAction::LogsLoaded {
            request,
            page: page(vec![entry(1, 1, 50, 30)], 1, 3),
        });

        state.apply(LogViewerAction::SelectProduct(Some(2)));
        assert!(state.entries().is_empty());
        assert_eq!(state.page(), 1);
        assert_eq!(state.pending_request().map(|r| r.page), Some(1));
    }

    #[test]
    fn test_clearing_selection_orphans_inflight_request() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let request = state.pending_request().unwrap();

        state.apply(LogViewerAction::SelectProduct(None));
        assert_eq!(state.logs_status(), &LoadStatus::Idle);
        assert_eq!(
            state.apply(LogViewerAction::LogsLoaded {
                request,
                page: page(vec![entry(1, 1, 50, 30)], 1, 1),
            }),
            ApplyOutcome::Stale
        );
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_page_bounds() {
        let mut state = loaded_viewer();
        assert_eq!(state.apply(LogViewerAction::NextPage), ApplyOutcome::Ignored);

        state.apply(LogViewerAction::SelectProduct(Some(1)));
        let request = state.pending_request().unwrap();
        state.apply(LogViewerAction::LogsLoaded {
            request,
            page: page(vec![], 1, 2),
        });

        assert_eq!(state.apply(LogViewerAction::PreviousPage), ApplyOutcome::Ignored);
        assert_eq!(state.apply(LogViewerAction::GoToPage(0)), ApplyOutcome::Ignored);
        assert_eq!(state.apply(LogViewerAction::GoToPage(3)), ApplyOutcome::Ignored);
        assert_eq!(state.apply(LogViewerAction::GoToPage(2)), ApplyOutcome::Applied);
    }

    #[test]
    fn test_refresh_reissues_current_page() {
        let mut state = loaded_viewer();
        assert_eq!(state.apply(LogViewerAction::Refresh), ApplyOutcome::Ignored);

        state.apply(LogViewerAction::SelectProduct(Some(2)));
        let before = state.pending_request().unwrap();
        state.apply(LogViewerAction::Refresh);
        let after = state.pending_request().unwrap();

        assert_eq!(before.product_id, after.product_id);
        assert_eq!(before.page, after.page);
        assert!(after.generation > before.generation);
    }

    #[test]
    fn test_filter_narrows_dropdown() {
        let mut state = loaded_viewer();
        state.apply(LogViewerAction::SetFilter("g2".to_string()));
        let names: Vec<&str> = state.filtered_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget"]);
        assert_eq!(state.apply(LogViewerAction::SetFilter("g2".to_string())), ApplyOutcome::Ignored);
    }
}
