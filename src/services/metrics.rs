// src/services/metrics.rs
use log::{debug, warn};

use crate::config::ModelConfig;
use crate::models::{FinancialInputs, Metrics};
use super::calculations::{checked_ratio, round_to};

/// Monthly cash burn: payroll plus infrastructure and marketing.
pub fn monthly_burn(inputs: &FinancialInputs) -> f64 {
    inputs.team_size * inputs.avg_salary / 12.0 + inputs.infra_cost + inputs.marketing_cost
}

pub fn compute_metrics(inputs: &FinancialInputs) -> Metrics {
    compute_metrics_with(&ModelConfig::default(), inputs)
}

pub fn compute_metrics_with(config: &ModelConfig, inputs: &FinancialInputs) -> Metrics {
    let monthly_burn = monthly_burn(inputs);
    let margin = config.margin_factor();

    // Churn is annual, so 1 / churn is the expected customer lifetime in years.
    let lifetime_years = checked_ratio(1.0, inputs.churn_rate / 100.0);
    if lifetime_years.is_none() {
        warn!("Churn rate is zero, LTV is unbounded");
    }
    let ltv = lifetime_years.map(|years| inputs.acv * years * margin);

    let runway_months = checked_ratio(config.current_cash, monthly_burn).map(|m| m.floor() as i64);

    let ltv_cac_ratio = ltv
        .and_then(|ltv| checked_ratio(ltv, config.cac))
        .map(|ratio| round_to(ratio, 1));

    let payback_months =
        checked_ratio(config.cac, inputs.acv * margin / 12.0).map(|months| round_to(months, 1));

    let metrics = Metrics {
        monthly_burn,
        ltv,
        cac: config.cac,
        arr: inputs.customers * inputs.acv,
        runway_months,
        ltv_cac_ratio,
        payback_months,
        gross_margin_percent: config.gross_margin_percent,
    };
    debug!("Computed metrics: {:?}", metrics);
    metrics
}
