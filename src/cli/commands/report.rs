use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use common::{ReportSource, ReportView};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::render;

pub async fn show_report(client: &ApiClient, source: ReportSource) -> Result<String> {
    let report = client
        .monthly_report(source, Local::now().date_naive())
        .await
        .context("Failed to load the monthly report")?;
    Ok(render::report(&ReportView::build(&report), source))
}

/// Reprint the report every `period` until Ctrl-C.
///
/// A failed poll is reported and the next tick retries.
pub async fn watch_report(client: &ApiClient, source: ReportSource, period: Duration) -> Result<()> {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(?period, %source, "Watching monthly report");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match show_report(client, source).await {
                    Ok(text) => println!("{}", text),
                    Err(e) => warn!("Report refresh failed: {:#}", e),
                }
            }
            _ = &mut shutdown => {
                info!("Stopped watching");
                return Ok(());
            }
        }
    }
}
