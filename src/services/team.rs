// src/services/team.rs
use log::debug;

use crate::config::ModelConfig;
use crate::models::{HiringInputs, TeamCosts};

pub fn compute_team_costs(hiring: &HiringInputs) -> TeamCosts {
    compute_team_costs_with(&ModelConfig::default(), hiring)
}

/// Monthly payroll today and after each hiring wave; waves are cumulative.
pub fn compute_team_costs_with(config: &ModelConfig, hiring: &HiringInputs) -> TeamCosts {
    let founders_yearly = config.founder_count * config.founder_salary;
    let near_term_yearly = hiring.planned_hires_near_term * hiring.new_hire_salary;
    let next_period_yearly = hiring.planned_hires_next_period * hiring.new_hire_salary;
    let total_hires = hiring.planned_hires_near_term + hiring.planned_hires_next_period;

    let costs = TeamCosts {
        current_monthly_cost: founders_yearly / 12.0,
        near_term_monthly_cost: (founders_yearly + near_term_yearly) / 12.0,
        next_period_monthly_cost: (founders_yearly + near_term_yearly + next_period_yearly) / 12.0,
        total_equity_allocated: total_hires * hiring.equity_percent_per_hire,
        total_team_size: config.founder_count + total_hires,
    };
    debug!("Computed team costs: {:?}", costs);
    costs
}
