//! HTTP client for the inventory backend's read-only endpoints

use chrono::NaiveDate;
use common::{
    endpoints, ApiResponse, EnhancedDashboardStats, InventoryLogPage, LegacyMonthlyReport,
    MonthlyReport, Product, ProductList, ReportError, ReportSource,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: StatusCode,
        message: String,
    },

    /// HTTP 200 with `success: false`
    #[error("{endpoint} rejected the request: {message}")]
    Rejected { endpoint: String, message: String },

    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid report: {0}")]
    Report(#[from] ReportError),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let client = Client::builder().timeout(settings.request_timeout()).build()?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and unwrap the `{ data: ... }` envelope
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            warn!(endpoint, %status, %message, "Non-OK response");
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status,
                message,
            });
        }

        let decode = |source| ClientError::Decode {
            endpoint: endpoint.to_string(),
            source,
        };
        let value: serde_json::Value = serde_json::from_str(&body).map_err(decode)?;

        // A rejection may come without `data`, so check before the typed decode
        if value.get("success") == Some(&serde_json::Value::Bool(false)) {
            let message = value
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("request was not successful")
                .to_string();
            warn!(endpoint, %message, "Request rejected");
            return Err(ClientError::Rejected {
                endpoint: endpoint.to_string(),
                message,
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_value(value).map_err(decode)?;
        Ok(envelope.into_data())
    }

    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        let list: ProductList = self.get(endpoints::PRODUCTS).await?;
        info!(count = list.products.len(), "Fetched product catalog");
        Ok(list.products)
    }

    pub async fn inventory_logs(&self, product_id: i64, page: u32) -> ClientResult<InventoryLogPage> {
        let logs: InventoryLogPage = self.get(&endpoints::inventory_logs(product_id, page)).await?;
        info!(product_id, page, entries = logs.logs.len(), "Fetched inventory logs");
        Ok(logs)
    }

    /// Current month's report from `source`; `as_of` anchors the enhanced
    /// endpoint, which carries no calendar fields of its own.
    pub async fn monthly_report(&self, source: ReportSource, as_of: NaiveDate) -> ClientResult<MonthlyReport> {
        let report = match source {
            ReportSource::Legacy => {
                let wire: LegacyMonthlyReport = self.get(source.endpoint()).await?;
                MonthlyReport::try_from(wire)?
            }
            ReportSource::Enhanced => {
                let wire: EnhancedDashboardStats = self.get(source.endpoint()).await?;
                MonthlyReport::from_enhanced(wire, as_of)?
            }
        };
        info!(
            %source,
            month = report.month,
            year = report.year,
            categories = report.categories.len(),
            "Fetched monthly report"
        );
        Ok(report)
    }
}
