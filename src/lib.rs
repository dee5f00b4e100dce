// src/lib.rs

pub mod config;
pub mod services;
pub mod models;
pub mod handlers;
pub mod routes;

pub use config::{ModelConfig, ServerConfig};
pub use services::dashboard::recompute;
pub use services::funding::compute_funding;
pub use services::metrics::compute_metrics;
pub use services::pipeline::aggregate_pipeline;
pub use services::projection::project_periods;
pub use services::team::compute_team_costs;
pub use services::three_year::compute_three_year_funding;
