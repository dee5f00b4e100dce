// src/bin/pipeline_report.rs
use dotenv::dotenv;
use log::info;
use std::env;

use startup_dashboard_model::services::calculations::format_currency;
use startup_dashboard_model::services::deals::{load_deals_csv, DealsClient};
use startup_dashboard_model::services::pipeline::aggregate_pipeline;

/// Aggregate a CRM export given as a CSV path, or the live list at DEALS_API_URL.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let deals = match env::args().nth(1) {
        Some(path) => {
            info!("Reading deals from {}", path);
            load_deals_csv(&path)?
        }
        None => {
            let url = env::var("DEALS_API_URL")
                .map_err(|_| anyhow::anyhow!("pass a CSV path or set DEALS_API_URL"))?;
            DealsClient::new(url).fetch_deals().await?
        }
    };

    let actuals = aggregate_pipeline(&deals);
    println!("Deals:           {}", deals.len());
    println!("Actual ARR:      {}", format_currency(actuals.actual_arr));
    println!("Customers:       {}", actuals.actual_customer_count);
    println!("Pipeline value:  {}", format_currency(actuals.pipeline_value));
    println!("Active deals:    {}", actuals.active_deals_count);
    Ok(())
}
