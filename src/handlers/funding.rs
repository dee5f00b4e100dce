// src/handlers/funding.rs
use log::{debug, info};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::config::ModelConfig;
use crate::models::{FundingInputs, HiringInputs};
use crate::services::funding::compute_funding_with;
use crate::services::team::compute_team_costs_with;

pub async fn post_funding(config: Arc<ModelConfig>, inputs: FundingInputs) -> Result<Json, Rejection> {
    info!("Handling request to compute round terms");

    let summary = compute_funding_with(&config, &inputs);
    debug!("Dilution {}%, founder ownership {}%", summary.dilution_percent, summary.founder_ownership_percent);
    Ok(warp::reply::json(&summary))
}

pub async fn post_team(config: Arc<ModelConfig>, hiring: HiringInputs) -> Result<Json, Rejection> {
    info!("Handling request to compute team costs");

    let costs = compute_team_costs_with(&config, &hiring);
    Ok(warp::reply::json(&costs))
}
