use anyhow::Result;
use common::filter_products;
use tracing::debug;

use crate::client::ApiClient;
use crate::render;

/// Catalog table, filtered the same way as the product picker
pub async fn list_products(client: &ApiClient, filter: Option<&str>) -> Result<String> {
    let products = client.products().await?;
    let shown = filter_products(&products, filter.unwrap_or(""));
    debug!(total = products.len(), shown = shown.len(), "Filtered product catalog");
    Ok(render::products_table(&shown))
}
