// src/services/three_year.rs
use log::{debug, info};

use crate::config::ModelConfig;
use crate::models::{Metrics, ThreeYearFundingSummary, ThreeYearInputs};

/// Burn totals and the raise needed to cover them.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRequirement {
    pub total_burn: f64,
    pub buffer: f64,
    pub total_to_raise: f64,
    pub recommended_raise: i64,
}

pub fn compute_three_year_funding(metrics: &Metrics, three_year: &ThreeYearInputs) -> ThreeYearFundingSummary {
    compute_three_year_funding_with(&ModelConfig::default(), metrics, three_year)
}

pub fn compute_three_year_funding_with(
    config: &ModelConfig,
    metrics: &Metrics,
    three_year: &ThreeYearInputs,
) -> ThreeYearFundingSummary {
    let year1_burn = metrics.monthly_burn * 12.0;

    let year2_monthly_burn = three_year.year2_team_size * three_year.avg_salary / 12.0
        + three_year.year2_monthly_marketing
        + three_year.year2_monthly_infra;
    let year3_monthly_burn = three_year.year3_team_size * three_year.avg_salary / 12.0
        + three_year.year3_monthly_marketing
        + three_year.year3_monthly_infra;

    let year2_burn = year2_monthly_burn * 12.0;
    let year3_burn = year3_monthly_burn * 12.0;

    let requirement = funding_requirement(config, [year1_burn, year2_burn, year3_burn]);

    let summary = ThreeYearFundingSummary {
        year1_burn,
        year2_monthly_burn,
        year2_burn,
        year3_monthly_burn,
        year3_burn,
        total_burn: requirement.total_burn,
        buffer: requirement.buffer,
        total_to_raise: requirement.total_to_raise,
        recommended_raise: requirement.recommended_raise,
    };
    debug!("Computed three-year funding: {:?}", summary);
    summary
}

/// Sum yearly burns, add the safety buffer and net out cash on hand.
/// The recommendation is rounded up to whole millions.
pub fn funding_requirement(config: &ModelConfig, yearly_burns: [f64; 3]) -> FundingRequirement {
    let total_burn: f64 = yearly_burns.iter().sum();
    let buffer = total_burn * config.funding_buffer_percent / 100.0;
    let total_to_raise = total_burn + buffer - config.current_cash;
    let recommended_raise = (total_to_raise / 1_000_000.0).ceil() as i64;

    if total_to_raise < 0.0 {
        info!("Cash on hand covers the plan; surplus of {:.0}", -total_to_raise);
    }

    FundingRequirement {
        total_burn,
        buffer,
        total_to_raise,
        recommended_raise,
    }
}
