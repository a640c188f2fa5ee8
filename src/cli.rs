use anyhow::Result;
use clap::{Parser, Subcommand};
use common::ReportSource;

pub mod commands;

use crate::client::ApiClient;
use crate::config::Settings;
use commands::{list_products, show_logs, show_report, watch_report};

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Terminal companion for the inventory log and monthly sales report views")]
#[command(version)]
pub struct Cli {
    /// Override the configured API base URL, e.g. http://localhost:5000/api
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the product catalog
    Products {
        /// Case-insensitive match on name or SKU
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show one page of a product's stock movements
    Logs {
        #[arg(short = 'i', long)]
        product_id: i64,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show the current month's category sales report
    Report {
        /// Which endpoint feeds the report: legacy or enhanced
        #[arg(short, long, default_value_t = ReportSource::Legacy)]
        source: ReportSource,

        /// Refetch on the configured refresh interval until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },
}

impl Cli {
    pub async fn run(self, mut settings: Settings) -> Result<()> {
        if let Some(api_url) = self.api_url {
            settings.api_base_url = api_url;
        }
        let client = ApiClient::new(&settings)?;
        tracing::debug!(base_url = client.base_url(), "API client ready");

        match self.command {
            Commands::Products { filter } => {
                print!("{}", list_products(&client, filter.as_deref()).await?);
            }
            Commands::Logs { product_id, page } => {
                print!("{}", show_logs(&client, product_id, page).await?);
            }
            Commands::Report { source, watch } => {
                if watch {
                    watch_report(&client, source, settings.report_refresh()).await?;
                } else {
                    print!("{}", show_report(&client, source).await?);
                }
            }
        }
        Ok(())
    }
}
