#[cfg(test)]
pub mod test_utils {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::client::ApiClient;
    use crate::config::Settings;

    pub const KNOWN_PRODUCT: i64 = 7;
    pub const LOG_PAGES: u32 = 3;

    pub fn products_body() -> Value {
        json!({
            "data": {
                "products": [
                    {"id": 7, "name": "Steel Bolt", "sku": "BLT-7", "category": "Hardware", "stock": 30, "minStock": 5},
                    {"id": 9, "name": "Copper Wire", "sku": "CW-9", "category": "Electrical", "stock": 2, "minStock": 10}
                ]
            }
        })
    }

    /// One entry per page, ids descending so page 1 holds the newest
    pub fn logs_body(page: u32) -> Value {
        let id = i64::from(LOG_PAGES - page + 1);
        let (log_type, balance_after) = if page == 1 { ("SALE", 30) } else { ("purchase", 70) };
        let reference = format!("REF-{}", id);
        json!({
            "success": true,
            "data": {
                "logs": [{
                    "id": id,
                    "productId": KNOWN_PRODUCT,
                    "type": log_type,
                    "quantity": 20,
                    "balanceBefore": 50,
                    "balanceAfter": balance_after,
                    "reference": reference,
                    "createdAt": "2024-03-05T10:00:00Z"
                }],
                "pagination": {"currentPage": page, "totalPages": LOG_PAGES, "totalItems": 45, "itemsPerPage": 20}
            }
        })
    }

    pub fn legacy_report_body() -> Value {
        json!({
            "data": {
                "month": 3,
                "year": 2024,
                "daysElapsed": 12,
                "totalDays": 31,
                "categories": [
                    {"category": "A", "totalQuantity": 100, "totalRevenue": 500.0, "productCount": 4},
                    {"category": "B", "totalQuantity": 300, "totalRevenue": 200.0, "productCount": 2}
                ],
                "totals": {"totalQuantity": 400, "totalRevenue": 700.0}
            }
        })
    }

    pub fn enhanced_stats_body() -> Value {
        json!({
            "success": true,
            "data": {
                "performance": {
                    "categoryPerformance": [
                        {"category": "A", "unitsSold": 100, "revenue": 500},
                        {"category": "B", "unitsSold": 300, "revenue": 200}
                    ]
                },
                "financial": {"monthRevenue": 1234.5}
            }
        })
    }

    async fn inventory_logs(
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
        let product_id = params.get("product_id").and_then(|v| v.parse::<i64>().ok());
        let page = params.get("page").and_then(|v| v.parse::<u32>().ok()).unwrap_or(1);

        if product_id != Some(KNOWN_PRODUCT) {
            return Err((StatusCode::NOT_FOUND, Json(json!({"error": "Product not found"}))));
        }
        if params.get("per_page").map(String::as_str) != Some("20") {
            return Err((StatusCode::BAD_REQUEST, Json(json!({"message": "per_page must be 20"}))));
        }
        Ok(Json(logs_body(page.clamp(1, LOG_PAGES))))
    }

    /// Backend that serves every endpoint the client knows
    pub fn stub_router() -> Router {
        Router::new()
            .route("/api/products", get(|| async { Json(products_body()) }))
            .route("/api/inventory-logs", get(inventory_logs))
            .route("/api/reports/monthly-category-sales", get(|| async { Json(legacy_report_body()) }))
            .route("/api/dashboard/enhanced-stats", get(|| async { Json(enhanced_stats_body()) }))
    }

    /// Serve `router` on an ephemeral port and return its API base URL
    pub async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Stub backend crashed");
        });
        format!("http://{}/api", addr)
    }

    pub fn test_settings(api_base_url: String) -> Settings {
        Settings {
            api_base_url,
            request_timeout_secs: 5,
            log_level: "warn".to_string(),
            report_refresh_secs: 1,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The level comes from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Client wired to a fresh stub backend serving `router`
    pub async fn setup_client_with(router: Router) -> (ApiClient, tracing::subscriber::DefaultGuard) {
        let guard = init_test_tracing();
        let base_url = spawn_backend(router).await;
        let client = ApiClient::new(&test_settings(base_url)).expect("Failed to build client");
        (client, guard)
    }

    pub async fn setup_test_client() -> (ApiClient, tracing::subscriber::DefaultGuard) {
        setup_client_with(stub_router()).await
    }
}
