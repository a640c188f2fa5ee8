//! Common transport-layer types and view logic shared by the stockboard
//! frontend and the terminal client.
//!
//! The structs here mirror the inventory backend's JSON payloads so both
//! consumers can deserialize API responses without duplicating shapes. The
//! pure helpers (formatting, ranking, classification) and the log viewer
//! state machine live here too, so they can be tested natively.

pub mod error;
pub mod format;
pub mod inventory_log;
pub mod log_viewer;
pub mod movement;
pub mod poll;
pub mod product;
pub mod ranking;
pub mod report;

pub use error::ReportError;
pub use format::{format_currency, format_magnitude};
pub use inventory_log::{DeltaDirection, InventoryLogEntry, InventoryLogPage, Pagination, ITEMS_PER_PAGE};
pub use log_viewer::{ApplyOutcome, LoadStatus, LogRequest, LogViewerAction, LogViewerState};
pub use movement::{classify_movement, MovementDescriptor, MovementKind};
pub use poll::PollFence;
pub use product::{filter_products, Product, ProductList};
pub use ranking::{palette_color, rank_categories, CategoryProjections, RankedCategory, PALETTE};
pub use report::{
    CategoryAggregate, EnhancedDashboardStats, LegacyMonthlyReport, MonthlyReport, ReportSource,
    ReportSummary, ReportView, REPORT_REFRESH_INTERVAL,
};

use serde::{Deserialize, Serialize};

/// Generic API response wrapper used by the backend.
///
/// Only `data` is guaranteed; older endpoints omit `message` and `success`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    #[serde(default)]
    pub message: Option<String>,
    /// Success flag, absent on some endpoints
    #[serde(default)]
    pub success: Option<bool>,
}

impl<T> ApiResponse<T> {
    /// An explicit `success: false` marks the payload as unusable.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Endpoint paths relative to the configured API base.
pub mod endpoints {
    use crate::inventory_log::ITEMS_PER_PAGE;

    pub const PRODUCTS: &str = "/products";
    pub const MONTHLY_CATEGORY_SALES: &str = "/reports/monthly-category-sales";
    pub const ENHANCED_DASHBOARD_STATS: &str = "/dashboard/enhanced-stats";

    /// Path for one page of a product's inventory log.
    pub fn inventory_logs(product_id: i64, page: u32) -> String {
        format!(
            "/inventory-logs?product_id={}&page={}&per_page={}",
            product_id, page, ITEMS_PER_PAGE
        )
    }
}
