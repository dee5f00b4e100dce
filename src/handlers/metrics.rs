// src/handlers/metrics.rs
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::config::ModelConfig;
use crate::models::{FinancialInputs, ThreeYearInputs};
use crate::services::metrics::compute_metrics_with;
use crate::services::projection::project_periods;
use crate::services::three_year::compute_three_year_funding_with;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeYearRequest {
    pub financial: FinancialInputs,
    pub three_year: ThreeYearInputs,
}

pub async fn post_metrics(config: Arc<ModelConfig>, inputs: FinancialInputs) -> Result<Json, Rejection> {
    info!("Handling request to compute metrics");

    let metrics = compute_metrics_with(&config, &inputs);
    debug!("Returning metrics: {:?}", metrics);
    Ok(warp::reply::json(&metrics))
}

pub async fn post_projection(config: Arc<ModelConfig>, inputs: FinancialInputs) -> Result<Json, Rejection> {
    info!("Handling request to project revenue and burn");

    let metrics = compute_metrics_with(&config, &inputs);
    let periods = project_periods(&inputs, &metrics);
    debug!("Returning {} projection periods", periods.len());
    Ok(warp::reply::json(&periods))
}

pub async fn post_three_year(config: Arc<ModelConfig>, request: ThreeYearRequest) -> Result<Json, Rejection> {
    info!("Handling request to compute three-year funding need");

    let metrics = compute_metrics_with(&config, &request.financial);
    let summary = compute_three_year_funding_with(&config, &metrics, &request.three_year);
    debug!("Recommended raise: {}M", summary.recommended_raise);
    Ok(warp::reply::json(&summary))
}
