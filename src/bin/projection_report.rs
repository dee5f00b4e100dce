// src/bin/projection_report.rs
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::env;
use std::fs;

use startup_dashboard_model::config::ModelConfig;
use startup_dashboard_model::models::ModelInputs;
use startup_dashboard_model::services::calculations::format_currency;
use startup_dashboard_model::services::dashboard::recompute;

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "unbounded".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: projection_report <inputs.json>")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    let inputs: ModelInputs = serde_json::from_str(&raw).with_context(|| format!("invalid inputs in {}", path))?;
    info!("Loaded model inputs from {}", path);

    let config = ModelConfig::from_env();
    let model = recompute(&config, &inputs);
    let m = &model.metrics;

    println!("Monthly burn:    {}", format_currency(m.monthly_burn));
    println!("ARR:             {}", format_currency(m.arr));
    println!("LTV:             {}", m.ltv.map(format_currency).unwrap_or_else(|| "unbounded".to_string()));
    println!("LTV/CAC:         {}", optional(m.ltv_cac_ratio));
    println!("Payback months:  {}", optional(m.payback_months));
    println!(
        "Runway months:   {}",
        m.runway_months.map(|r| r.to_string()).unwrap_or_else(|| "unbounded".to_string())
    );
    println!();

    println!("{:<10} {:>10} {:>12} {:>12} {:>12}", "Period", "Customers", "ARR", "Burn/mo", "Net burn");
    for period in &model.projection {
        println!(
            "{:<10} {:>10} {:>12} {:>12} {:>12}",
            period.period,
            format!("{:.1}", period.customers),
            format_currency(period.arr),
            format_currency(period.monthly_burn),
            format_currency(period.net_burn),
        );
    }
    println!();

    let t = &model.three_year;
    println!("Three-year burn: {}", format_currency(t.total_burn));
    println!("Buffer:          {}", format_currency(t.buffer));
    println!("To raise:        {}", format_currency(t.total_to_raise));
    println!("Recommended:     ${}M", t.recommended_raise);

    for issue in &model.issues {
        println!("{:?}: {} {}", issue.severity, issue.field, issue.message);
    }
    Ok(())
}
