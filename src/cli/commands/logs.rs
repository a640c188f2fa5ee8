use anyhow::{bail, Context, Result};
use tracing::{debug, trace};

use crate::client::ApiClient;
use crate::render;

pub async fn show_logs(client: &ApiClient, product_id: i64, page: u32) -> Result<String> {
    trace!(product_id, page, "Entering show_logs");
    if page == 0 {
        bail!("pages start at 1");
    }

    let products = client.products().await.context("Failed to load products")?;
    let Some(product) = products.into_iter().find(|p| p.id == product_id) else {
        bail!("no product with id {}", product_id);
    };

    let logs = client
        .inventory_logs(product_id, page)
        .await
        .with_context(|| format!("Failed to load inventory logs for product {}", product_id))?;
    debug!(entries = logs.logs.len(), "Rendering log page");

    Ok(render::log_page(&product, &logs))
}
