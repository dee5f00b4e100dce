// src/handlers/dashboard.rs
use log::{debug, info, warn};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::config::ModelConfig;
use crate::models::ModelInputs;
use crate::services::dashboard::recompute;
use crate::services::validation::validate_inputs;

pub async fn post_dashboard(config: Arc<ModelConfig>, inputs: ModelInputs) -> Result<Json, Rejection> {
    info!("Handling request to recompute the dashboard");

    let model = recompute(&config, &inputs);
    debug!("Dashboard metrics: {:?}", model.metrics);
    Ok(warp::reply::json(&model))
}

pub async fn post_validate(inputs: ModelInputs) -> Result<Json, Rejection> {
    info!("Handling request to validate dashboard inputs");

    let issues = validate_inputs(&inputs);
    if !issues.is_empty() {
        warn!("Inputs have {} validation issues", issues.len());
    }
    Ok(warp::reply::json(&issues))
}
