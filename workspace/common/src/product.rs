use serde::{Deserialize, Serialize};

/// Product as listed by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub min_stock: u64,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Label used by the product picker, e.g. `Widget (W1)`.
    pub fn display_label(&self) -> String {
        if self.sku.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.sku)
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.sku.to_lowercase().contains(needle)
    }
}

/// Payload of `GET /products`; a missing list is read as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Case-insensitive substring match against name or SKU.
///
/// A blank query keeps the whole catalog, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.matches(&needle)).collect()
}
