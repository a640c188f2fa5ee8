use chrono::Local;
use common::{EnhancedDashboardStats, LegacyMonthlyReport, MonthlyReport, ReportSource};
use crate::api_client;

/// Get the current month's category report from the chosen endpoint,
/// adapted into the canonical report shape
pub async fn get_monthly_report(source: ReportSource) -> Result<MonthlyReport, String> {
    log::trace!("Fetching monthly report from {} source", source);
    let result = match source {
        ReportSource::Legacy => api_client::get::<LegacyMonthlyReport>(source.endpoint())
            .await
            .and_then(|wire| MonthlyReport::try_from(wire).map_err(|e| e.to_string())),
        ReportSource::Enhanced => api_client::get::<EnhancedDashboardStats>(source.endpoint())
            .await
            .and_then(|wire| {
                MonthlyReport::from_enhanced(wire, Local::now().date_naive()).map_err(|e| e.to_string())
            }),
    };
    match &result {
        Ok(report) => log::info!(
            "Fetched monthly report {}/{} with {} categories",
            report.month,
            report.year,
            report.categories.len()
        ),
        Err(e) => log::error!("Failed to fetch monthly report ({}): {}", source, e),
    }
    result
}
