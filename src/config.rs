// src/config.rs
use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::str::FromStr;

/// Fixed assumptions of the model. They are not derived from any input;
/// the defaults reproduce the dashboard's published numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Customer acquisition cost.
    pub cac: f64,
    pub gross_margin_percent: f64,
    /// Cash in the bank today.
    pub current_cash: f64,
    pub founder_count: f64,
    /// Yearly salary per founder.
    pub founder_salary: f64,
    /// Pre-raise stake held by each founder.
    pub founder_stake_percent: f64,
    /// Safety margin added on top of the three-year burn.
    pub funding_buffer_percent: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            cac: 35_000.0,
            gross_margin_percent: 85.0,
            current_cash: 165_000.0,
            founder_count: 2.0,
            founder_salary: 100_000.0,
            founder_stake_percent: 31.5,
            funding_buffer_percent: 20.0,
        }
    }
}

impl ModelConfig {
    /// Share of contract value retained after cost of revenue.
    pub fn margin_factor(&self) -> f64 {
        self.gross_margin_percent / 100.0
    }

    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = ModelConfig::default();

        let config = ModelConfig {
            cac: env_or("MODEL_CAC", defaults.cac),
            gross_margin_percent: env_or("MODEL_GROSS_MARGIN_PERCENT", defaults.gross_margin_percent),
            current_cash: env_or("MODEL_CURRENT_CASH", defaults.current_cash),
            founder_count: env_or("MODEL_FOUNDER_COUNT", defaults.founder_count),
            founder_salary: env_or("MODEL_FOUNDER_SALARY", defaults.founder_salary),
            founder_stake_percent: env_or("MODEL_FOUNDER_STAKE_PERCENT", defaults.founder_stake_percent),
            funding_buffer_percent: env_or("MODEL_FUNDING_BUFFER_PERCENT", defaults.funding_buffer_percent),
        };
        info!("Model configuration: {:?}", config);
        config
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// List endpoint of the CRM deal collaborator.
    pub deals_api_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env_or("PORT", 3030u16);
        let deals_api_url = env::var("DEALS_API_URL").ok().filter(|url| !url.trim().is_empty());
        if deals_api_url.is_none() {
            warn!("DEALS_API_URL not set, GET /api/v1/pipeline will be unavailable");
        }

        ServerConfig { port, deals_api_url }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("${} is not a valid value ({:?}), defaulting to {:?}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
