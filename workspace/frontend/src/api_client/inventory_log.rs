use common::{InventoryLogPage, LogRequest};
use crate::api_client;

/// Get one page of a product's stock movements
pub async fn get_inventory_logs(request: LogRequest) -> Result<InventoryLogPage, String> {
    log::trace!(
        "Fetching inventory logs for product {} page {} (generation {})",
        request.product_id,
        request.page,
        request.generation
    );
    let result = api_client::get::<InventoryLogPage>(&request.endpoint()).await;
    match &result {
        Ok(page) => log::info!(
            "Fetched {} log entries for product {} (page {} of {})",
            page.logs.len(),
            request.product_id,
            page.pagination.current_page,
            page.pagination.total_pages
        ),
        Err(e) => log::error!("Failed to fetch inventory logs for product {}: {}", request.product_id, e),
    }
    result
}
