//! Monthly category sales report: wire shapes, adapters and the view model
//! rendered by the report widget.
//!
//! Two endpoints serve this report with different schemas. Each has its own
//! wire struct and an adapter into the canonical [`MonthlyReport`]. The
//! adapters reject incomplete payloads instead of defaulting missing numbers
//! to zero, so a broken backend never renders as "no sales".

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::endpoints;
use crate::error::{ReportError, Result};
use crate::ranking::{rank_categories, CategoryProjections};

/// How often a mounted report widget re-queries the backend.
pub const REPORT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Units and revenue of one product category over the report window.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub category: String,
    pub units_sold: u64,
    pub revenue: f64,
    pub product_count: Option<u64>,
}

/// Canonical monthly report, independent of the endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub days_elapsed: u32,
    pub total_days: u32,
    /// Backend order; ranking happens in [`ReportView`]
    pub categories: Vec<CategoryAggregate>,
    /// Authoritative total revenue when the backend supplies one
    pub total_revenue: Option<f64>,
}

// ===================== Wire shapes =====================

/// `GET /reports/monthly-category-sales` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMonthlyReport {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub days_elapsed: Option<u32>,
    pub total_days: Option<u32>,
    pub categories: Option<Vec<LegacyCategoryRow>>,
    pub totals: Option<LegacyTotals>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCategoryRow {
    pub category: Option<String>,
    pub total_quantity: Option<f64>,
    pub total_revenue: Option<f64>,
    pub product_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTotals {
    pub total_quantity: Option<f64>,
    pub total_revenue: Option<f64>,
}

/// Enhanced dashboard stats payload; only the parts the report reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedDashboardStats {
    pub performance: Option<EnhancedPerformance>,
    pub financial: Option<EnhancedFinancial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPerformance {
    pub category_performance: Option<Vec<EnhancedCategoryRow>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedCategoryRow {
    pub category: Option<String>,
    pub units_sold: Option<f64>,
    pub revenue: Option<f64>,
    pub product_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedFinancial {
    pub month_revenue: Option<f64>,
}

// ===================== Validation =====================

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ReportError::MissingField(field))
}

fn whole_units(value: Option<f64>, field: &'static str) -> Result<u64> {
    let value = require(value, field)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ReportError::invalid(field, format!("{} is not a non-negative number", value)));
    }
    if value.fract() != 0.0 {
        return Err(ReportError::invalid(field, format!("{} is not a whole number", value)));
    }
    Ok(value as u64)
}

fn amount(value: f64, field: &'static str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ReportError::invalid(field, format!("{} is not a non-negative number", value)));
    }
    Ok(value)
}

fn category_name(value: Option<String>, field: &'static str) -> Result<String> {
    let name = require(value, field)?;
    if name.trim().is_empty() {
        return Err(ReportError::invalid(field, "blank category name"));
    }
    Ok(name)
}

fn check_unique(categories: &[CategoryAggregate]) -> Result<()> {
    let mut seen = HashSet::new();
    for aggregate in categories {
        if !seen.insert(aggregate.category.as_str()) {
            return Err(ReportError::DuplicateCategory(aggregate.category.clone()));
        }
    }
    Ok(())
}

fn check_window(month: u32, days_elapsed: u32, total_days: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(ReportError::invalid("month", format!("{} is not a calendar month", month)));
    }
    if total_days == 0 {
        return Err(ReportError::invalid("totalDays", "must be at least 1"));
    }
    if days_elapsed > total_days {
        return Err(ReportError::DaysOutOfRange {
            elapsed: days_elapsed,
            total: total_days,
        });
    }
    Ok(())
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_of_next.pred_opt().map(|last| last.day())
}

// ===================== Adapters =====================

impl TryFrom<LegacyMonthlyReport> for MonthlyReport {
    type Error = ReportError;

    fn try_from(wire: LegacyMonthlyReport) -> Result<Self> {
        let month = require(wire.month, "month")?;
        let year = require(wire.year, "year")?;
        let days_elapsed = require(wire.days_elapsed, "daysElapsed")?;
        let total_days = require(wire.total_days, "totalDays")?;
        check_window(month, days_elapsed, total_days)?;

        let categories = require(wire.categories, "categories")?
            .into_iter()
            .map(|row| {
                Ok(CategoryAggregate {
                    category: category_name(row.category, "categories[].category")?,
                    units_sold: whole_units(row.total_quantity, "categories[].totalQuantity")?,
                    revenue: amount(
                        require(row.total_revenue, "categories[].totalRevenue")?,
                        "categories[].totalRevenue",
                    )?,
                    product_count: row.product_count,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        check_unique(&categories)?;

        let total_revenue = match wire.totals.and_then(|t| t.total_revenue) {
            Some(total) => Some(amount(total, "totals.totalRevenue")?),
            None => None,
        };

        debug!(month, year, categories = categories.len(), "Adapted legacy monthly report");
        Ok(MonthlyReport {
            month,
            year,
            days_elapsed,
            total_days,
            categories,
            total_revenue,
        })
    }
}

impl MonthlyReport {
    /// Adapts the enhanced dashboard stats. That endpoint always describes
    /// the running month, so the window is derived from `as_of`.
    pub fn from_enhanced(wire: EnhancedDashboardStats, as_of: NaiveDate) -> Result<Self> {
        let performance = require(wire.performance, "performance")?;
        let rows = require(performance.category_performance, "performance.categoryPerformance")?;

        let categories = rows
            .into_iter()
            .map(|row| {
                Ok(CategoryAggregate {
                    category: category_name(row.category, "categoryPerformance[].category")?,
                    units_sold: whole_units(row.units_sold, "categoryPerformance[].unitsSold")?,
                    revenue: amount(
                        require(row.revenue, "categoryPerformance[].revenue")?,
                        "categoryPerformance[].revenue",
                    )?,
                    product_count: row.product_count,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        check_unique(&categories)?;

        let total_revenue = match wire.financial.and_then(|f| f.month_revenue) {
            Some(total) => Some(amount(total, "financial.monthRevenue")?),
            None => None,
        };

        let month = as_of.month();
        let year = as_of.year();
        let total_days = days_in_month(year, month)
            .ok_or_else(|| ReportError::invalid("asOf", format!("no calendar month for {}", as_of)))?;

        Ok(MonthlyReport {
            month,
            year,
            days_elapsed: as_of.day(),
            total_days,
            categories,
            total_revenue,
        })
    }

    pub fn total_units(&self) -> u64 {
        self.categories.iter().map(|c| c.units_sold).sum()
    }

    /// Revenue summed over categories, used when no authoritative total exists.
    pub fn summed_revenue(&self) -> f64 {
        self.categories.iter().map(|c| c.revenue).sum()
    }

    pub fn summary(&self) -> ReportSummary {
        let (total_revenue, revenue_is_authoritative) = match self.total_revenue {
            Some(total) => (total, true),
            None => (self.summed_revenue(), false),
        };

        ReportSummary {
            month: self.month,
            year: self.year,
            days_elapsed: self.days_elapsed,
            total_days: self.total_days,
            total_units: self.total_units(),
            total_revenue,
            revenue_is_authoritative,
            category_count: self.categories.len(),
        }
    }
}

/// Which backend endpoint feeds the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    #[default]
    Legacy,
    Enhanced,
}

impl ReportSource {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ReportSource::Legacy => endpoints::MONTHLY_CATEGORY_SALES,
            ReportSource::Enhanced => endpoints::ENHANCED_DASHBOARD_STATS,
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::Legacy => write!(f, "legacy"),
            ReportSource::Enhanced => write!(f, "enhanced"),
        }
    }
}

impl FromStr for ReportSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(ReportSource::Legacy),
            "enhanced" => Ok(ReportSource::Enhanced),
            other => Err(format!("unknown report source '{}' (expected legacy or enhanced)", other)),
        }
    }
}

/// Header figures of the report widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub month: u32,
    pub year: i32,
    pub days_elapsed: u32,
    pub total_days: u32,
    pub total_units: u64,
    pub total_revenue: f64,
    /// `true` when `total_revenue` came from the backend rather than a sum
    pub revenue_is_authoritative: bool,
    pub category_count: usize,
}

impl ReportSummary {
    /// Share of the month already elapsed, in percent.
    pub fn month_progress(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        f64::from(self.days_elapsed) / f64::from(self.total_days) * 100.0
    }

    /// e.g. `March 2024`
    pub fn period_label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown month");
        format!("{} {}", name, self.year)
    }
}

/// Everything the widget renders for one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub summary: ReportSummary,
    pub projections: CategoryProjections,
}

impl ReportView {
    pub fn build(report: &MonthlyReport) -> Self {
        let projections = rank_categories(&report.categories);
        if projections.is_empty() {
            warn!(month = report.month, year = report.year, "Monthly report has no categories");
        }
        Self {
            summary: report.summary(),
            projections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    /// Percentage of each pie slice relative to the slices shown.
    pub fn pie_shares(&self) -> Vec<f64> {
        let shown: u64 = self.projections.pie.iter().map(|c| c.units_sold).sum();
        self.projections
            .pie
            .iter()
            .map(|c| {
                if shown == 0 {
                    0.0
                } else {
                    c.units_sold as f64 / shown as f64 * 100.0
                }
            })
            .collect()
    }

    /// Value-axis ticks for the bar chart.
    pub fn bar_axis_ticks(&self) -> Vec<f64> {
        let max = self.projections.bar.iter().map(|c| c.units_sold).max().unwrap_or(0);
        axis_ticks(max, 5)
    }
}

/// Evenly spaced "nice" ticks (1, 2 or 5 times a power of ten) from zero up
/// to the first tick at or above `max`, aiming for about `count` intervals.
pub fn axis_ticks(max: u64, count: usize) -> Vec<f64> {
    if max == 0 || count == 0 {
        return vec![0.0];
    }

    let raw_step = max as f64 / count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = (nice * magnitude).max(1.0);

    let mut ticks = vec![0.0];
    let mut tick = 0.0;
    while tick < max as f64 {
        tick += step;
        ticks.push(tick);
    }
    ticks
}
