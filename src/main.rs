use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use startup_dashboard_model::config::{ModelConfig, ServerConfig};
use startup_dashboard_model::routes;
use startup_dashboard_model::services::deals::DealsClient;

#[tokio::main]
async fn main() {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let server = ServerConfig::from_env();
    let model = Arc::new(ModelConfig::from_env());
    let deals = server.deals_api_url.clone().map(|url| Arc::new(DealsClient::new(url)));

    // Bind to 0.0.0.0 so the container port is reachable
    let addr: SocketAddr = ([0, 0, 0, 0], server.port).into();
    info!("Will bind to: {}", addr);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes(model, deals).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
}
