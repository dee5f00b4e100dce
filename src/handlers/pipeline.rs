// src/handlers/pipeline.rs
use log::{error, info};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::Deal;
use crate::services::deals::DealsClient;
use crate::services::pipeline::aggregate_pipeline;

pub async fn post_pipeline(deals: Vec<Deal>) -> Result<Json, Rejection> {
    info!("Handling request to aggregate {} supplied deals", deals.len());
    Ok(warp::reply::json(&aggregate_pipeline(&deals)))
}

pub async fn get_pipeline(client: Option<Arc<DealsClient>>) -> Result<Json, Rejection> {
    info!("Handling request to aggregate the CRM pipeline");

    let client = client.ok_or_else(|| {
        error!("No deal collaborator configured");
        warp::reject::custom(ApiError::unavailable("DEALS_API_URL is not configured"))
    })?;

    let deals = client.fetch_deals().await.map_err(|e| {
        error!("Failed to fetch deals from {}: {:#}", client.url(), e);
        warp::reject::custom(ApiError::upstream(format!("Failed to fetch deals: {}", e)))
    })?;

    Ok(warp::reply::json(&aggregate_pipeline(&deals)))
}
