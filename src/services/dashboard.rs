// src/services/dashboard.rs
use log::info;

use crate::config::ModelConfig;
use crate::models::{
    ActualsSnapshot, DashboardModel, DisplayFigures, FigureSource, Metrics, ModelInputs,
};
use super::funding::compute_funding_with;
use super::metrics::compute_metrics_with;
use super::pipeline::aggregate_pipeline;
use super::projection::{project_periods_from, FiscalQuarter};
use super::team::compute_team_costs_with;
use super::three_year::compute_three_year_funding_with;
use super::validation::validate_inputs;

/// Recompute every derived figure from scratch, starting the projection at
/// the current quarter.
pub fn recompute(config: &ModelConfig, inputs: &ModelInputs) -> DashboardModel {
    recompute_from(config, FiscalQuarter::current(), inputs)
}

pub fn recompute_from(config: &ModelConfig, start: FiscalQuarter, inputs: &ModelInputs) -> DashboardModel {
    let metrics = compute_metrics_with(config, &inputs.financial);
    let projection = project_periods_from(start, &inputs.financial, &metrics);
    let team_costs = compute_team_costs_with(config, &inputs.hiring);
    let funding = compute_funding_with(config, &inputs.funding);
    let three_year = compute_three_year_funding_with(config, &metrics, &inputs.three_year);
    let actuals = aggregate_pipeline(&inputs.deals);
    let display = display_figures(&metrics, inputs.financial.customers, &actuals);
    let issues = validate_inputs(inputs);

    info!(
        "Recomputed dashboard: {} projection periods, {} validation issues, headline figures {:?}",
        projection.len(),
        issues.len(),
        display.source
    );

    DashboardModel {
        metrics,
        projection,
        team_costs,
        funding,
        three_year,
        actuals,
        display,
        issues,
    }
}

/// Closed deals, when there are any, replace the modelled ARR and customer count.
pub fn display_figures(metrics: &Metrics, projected_customers: f64, actuals: &ActualsSnapshot) -> DisplayFigures {
    if actuals.actual_customer_count > 0 {
        DisplayFigures {
            arr: actuals.actual_arr,
            customers: actuals.actual_customer_count as f64,
            source: FigureSource::Actual,
        }
    } else {
        DisplayFigures {
            arr: metrics.arr,
            customers: projected_customers,
            source: FigureSource::Projected,
        }
    }
}
