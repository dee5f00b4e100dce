// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use crate::config::ModelConfig;
use crate::handlers::{dashboard::{post_dashboard, post_validate},
                     funding::{post_funding, post_team},
                     metrics::{post_metrics, post_projection, post_three_year},
                     pipeline::{get_pipeline, post_pipeline}};
use crate::services::deals::DealsClient;
use log::info;
use serde::de::DeserializeOwned;

use std::convert::Infallible;
use warp::{Filter, Reply};
use warp::http::StatusCode;
use crate::handlers::error::ApiError;

const MAX_BODY_BYTES: u64 = 256 * 1024;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(body_error) = err.find::<warp::filters::body::BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = body_error.to_string();
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        code = StatusCode::PAYLOAD_TOO_LARGE;
        message = "Payload Too Large".to_string();
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        code = StatusCode::LENGTH_REQUIRED;
        message = "Length Required".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

pub fn routes(
    config: Arc<ModelConfig>,
    deals: Option<Arc<DealsClient>>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let config_filter = warp::any().map(move || config.clone());
    let deals_filter = warp::any().map(move || deals.clone());

    let metrics_route = warp::path!("api" / "v1" / "metrics")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_metrics);

    let projection_route = warp::path!("api" / "v1" / "projection")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_projection);

    let team_route = warp::path!("api" / "v1" / "team")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_team);

    let funding_route = warp::path!("api" / "v1" / "funding")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_funding);

    let three_year_route = warp::path!("api" / "v1" / "funding" / "three_year")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_three_year);

    let pipeline_post_route = warp::path!("api" / "v1" / "pipeline")
        .and(warp::post())
        .and(json_body())
        .and_then(post_pipeline);

    let pipeline_get_route = warp::path!("api" / "v1" / "pipeline")
        .and(warp::get())
        .and(deals_filter)
        .and_then(get_pipeline);

    let dashboard_route = warp::path!("api" / "v1" / "dashboard")
        .and(warp::post())
        .and(config_filter.clone())
        .and(json_body())
        .and_then(post_dashboard);

    let validate_route = warp::path!("api" / "v1" / "validate")
        .and(warp::post())
        .and(json_body())
        .and_then(post_validate);

    info!("All routes configured successfully.");

    metrics_route
        .or(projection_route)
        .or(team_route)
        .or(funding_route)
        .or(three_year_route)
        .or(pipeline_post_route)
        .or(pipeline_get_route)
        .or(dashboard_route)
        .or(validate_route)
        .recover(handle_rejection)
}
