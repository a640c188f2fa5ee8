use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed page size requested from `/inventory-logs`.
pub const ITEMS_PER_PAGE: u32 = 20;

/// One stock movement as returned by `/inventory-logs`.
///
/// `quantity` is carried as the backend reports it; the change shown to the
/// user is always [`delta`](Self::delta), the difference of the balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLogEntry {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(rename = "type", default)]
    pub log_type: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub balance_before: i64,
    #[serde(default)]
    pub balance_after: i64,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    /// `None` when the backend sent no timestamp or one we could not read.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 as well as the bare SQL `YYYY-MM-DD HH:MM:SS[.fff]` shape,
/// which is read as UTC. Anything else decodes to `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => parse_timestamp(&text),
        Raw::Other(_) => None,
    })
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl InventoryLogEntry {
    pub fn delta(&self) -> i64 {
        self.balance_after - self.balance_before
    }

    pub fn direction(&self) -> DeltaDirection {
        DeltaDirection::of(self.delta())
    }

    /// Signed delta as shown in the log list: `+20`, `-20` or `0`.
    pub fn formatted_delta(&self) -> String {
        format_delta(self.delta())
    }

    /// Timestamp rendered with `fmt`, or `"unknown date"`.
    pub fn formatted_created_at<Tz>(&self, tz: &Tz, fmt: &str) -> String
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match &self.created_at {
            Some(at) => at.with_timezone(tz).format(fmt).to_string(),
            None => "unknown date".to_string(),
        }
    }
}

/// Renders a signed stock change.
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

/// Which way a movement moved the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
    Unchanged,
}

impl DeltaDirection {
    pub fn of(delta: i64) -> Self {
        match delta {
            d if d > 0 => DeltaDirection::Up,
            d if d < 0 => DeltaDirection::Down,
            _ => DeltaDirection::Unchanged,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeltaDirection::Up => "fas fa-arrow-up",
            DeltaDirection::Down => "fas fa-arrow-down",
            DeltaDirection::Unchanged => "fas fa-minus",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            DeltaDirection::Up => "text-success",
            DeltaDirection::Down => "text-error",
            DeltaDirection::Unchanged => "text-base-content",
        }
    }

    /// Plain-text marker for terminal output.
    pub fn arrow(&self) -> char {
        match self {
            DeltaDirection::Up => '↑',
            DeltaDirection::Down => '↓',
            DeltaDirection::Unchanged => '·',
        }
    }
}

/// Server-reported page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn default_items_per_page() -> u32 {
    ITEMS_PER_PAGE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Clamps the page counters so that `1 <= current_page <= total_pages`.
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, total_pages),
            total_pages,
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page buttons to show: first, last, and the current page with its
    /// neighbours. `None` marks a gap. With `max_visible` or fewer pages every
    /// page is listed.
    pub fn page_window(&self, max_visible: u32) -> Vec<Option<u32>> {
        let Pagination {
            current_page: current,
            total_pages: total,
            ..
        } = self.normalized();

        if total <= max_visible.max(3) {
            return (1..=total).map(Some).collect();
        }

        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);

        let mut pages = vec![Some(1)];
        if start > 2 {
            pages.push(None);
        }
        pages.extend((start..=end).map(Some));
        if end < total - 1 {
            pages.push(None);
        }
        pages.push(Some(total));
        pages
    }
}

/// Payload of `/inventory-logs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryLogPage {
    #[serde(default)]
    pub logs: Vec<InventoryLogEntry>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_JSON: &str = r#"{
        "id": 11,
        "productId": 1,
        "productName": "Widget",
        "productSku": "W1",
        "type": "sale",
        "quantity": 20,
        "balanceBefore": 50,
        "balanceAfter": 30,
        "reference": "INV-42",
        "reason": null,
        "createdAt": "2024-03-05T10:15:00Z"
    }"#;

    #[test]
    fn test_negative_delta_points_down() {
        let entry: InventoryLogEntry = serde_json::from_str(ENTRY_JSON).unwrap();
        assert_eq!(entry.delta(), -20);
        assert_eq!(entry.formatted_delta(), "-20");
        assert_eq!(entry.direction(), DeltaDirection::Down);
        assert_eq!(entry.direction().icon(), "fas fa-arrow-down");
    }

    #[test]
    fn test_delta_ignores_quantity_field() {
        let mut entry: InventoryLogEntry = serde_json::from_str(ENTRY_JSON).unwrap();
        entry.quantity = 999;
        assert_eq!(entry.delta(), -20);
        assert_eq!(entry.log_type.as_deref(), Some("sale"));
        assert!(entry.condition.is_none());
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(20), "+20");
        assert_eq!(format_delta(0), "0");
        assert_eq!(DeltaDirection::of(0), DeltaDirection::Unchanged);
    }

    #[test]
    fn test_pagination_normalized() {
        let odd = Pagination {
            current_page: 0,
            total_pages: 0,
            total_items: 0,
            items_per_page: 20,
        };
        let fixed = odd.normalized();
        assert_eq!(fixed.current_page, 1);
        assert_eq!(fixed.total_pages, 1);

        let past_end = Pagination {
            current_page: 9,
            total_pages: 3,
            total_items: 60,
            items_per_page: 20,
        };
        assert_eq!(past_end.normalized().current_page, 3);
    }

    #[test]
    fn test_page_without_pagination() {
        let page: InventoryLogPage = serde_json::from_str(r#"{"logs": []}"#).unwrap();
        assert_eq!(page.pagination, Pagination::default());
        assert!(!page.pagination.has_next());
        assert!(!page.pagination.has_previous());
    }

    #[test]
    fn test_sql_timestamp_is_read_as_utc() {
        let json = ENTRY_JSON.replace("2024-03-05T10:15:00Z", "2024-03-05 10:15:00");
        let entry: InventoryLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(
            entry.formatted_created_at(&Utc, "%Y-%m-%d %H:%M"),
            "2024-03-05 10:15"
        );
        assert_eq!(
            parse_timestamp("2024-03-05 10:15:00.250").map(|t| t.timestamp_subsec_millis()),
            Some(250)
        );
    }

    #[test]
    fn test_unreadable_timestamp_keeps_entry() {
        let body = r#"{
            "logs": [
                {"id": 1, "productId": 1, "balanceBefore": 5, "balanceAfter": 8, "createdAt": "yesterday"},
                {"id": 2, "productId": 1, "balanceBefore": 8, "balanceAfter": 6, "createdAt": null},
                {"id": 3, "productId": 1, "balanceBefore": 6, "balanceAfter": 6, "createdAt": 1709633700}
            ]
        }"#;
        let page: InventoryLogPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.logs.len(), 3);
        assert!(page.logs.iter().all(|entry| entry.created_at.is_none()));
        assert_eq!(page.logs[0].formatted_created_at(&Utc, "%Y"), "unknown date");
        assert_eq!(page.logs[1].delta(), -2);
    }

    #[test]
    fn test_missing_balances_default_to_zero() {
        let body = r#"{"logs": [{"id": 4, "productId": 1, "type": "adjustment", "createdAt": "2024-03-05T10:15:00Z"}]}"#;
        let page: InventoryLogPage = serde_json::from_str(body).unwrap();
        let entry = &page.logs[0];
        assert_eq!(entry.balance_before, 0);
        assert_eq!(entry.balance_after, 0);
        assert_eq!(entry.direction(), DeltaDirection::Unchanged);
    }

    #[test]
    fn test_partial_pagination_falls_back_to_first_page() {
        let page: InventoryLogPage =
            serde_json::from_str(r#"{"logs": [], "pagination": {"currentPage": 1}}"#).unwrap();
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next());

        let page: InventoryLogPage =
            serde_json::from_str(r#"{"pagination": {"totalPages": 4, "totalItems": 70}}"#).unwrap();
        let pagination = page.pagination.normalized();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, 4);
        assert!(pagination.has_next());
    }

    fn pages(current_page: u32, total_pages: u32) -> Pagination {
        Pagination {
            current_page,
            total_pages,
            ..Pagination::default()
        }
    }

    #[test]
    fn test_page_window_small() {
        assert_eq!(pages(2, 3).page_window(5), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(pages(1, 1).page_window(5), vec![Some(1)]);
    }

    #[test]
    fn test_page_window_gaps() {
        assert_eq!(
            pages(5, 10).page_window(5),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(pages(1, 10).page_window(5), vec![Some(1), Some(2), None, Some(10)]);
        assert_eq!(pages(10, 10).page_window(5), vec![Some(1), None, Some(9), Some(10)]);
    }

    #[test]
    fn test_page_window_clamps_current() {
        assert_eq!(pages(0, 0).page_window(5), vec![Some(1)]);
        assert_eq!(pages(42, 10).page_window(5), vec![Some(1), None, Some(9), Some(10)]);
    }
}
