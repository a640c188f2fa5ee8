use common::{endpoints, Product, ProductList};
use crate::api_client;

/// Get the full product catalog
pub async fn get_products() -> Result<Vec<Product>, String> {
    log::trace!("Fetching product catalog");
    let result = api_client::get::<ProductList>(endpoints::PRODUCTS)
        .await
        .map(|list| list.products);
    match &result {
        Ok(products) => log::info!("Fetched {} products", products.len()),
        Err(e) => log::error!("Failed to fetch products: {}", e),
    }
    result
}
