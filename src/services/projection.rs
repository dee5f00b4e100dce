// src/services/projection.rs
use chrono::{Datelike, NaiveDate, Utc};
use log::debug;
use std::fmt;

use crate::models::{FinancialInputs, Metrics, ProjectionPeriod};

/// The projection always covers the current quarter plus three years.
pub const PROJECTION_PERIODS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiscalQuarter {
    pub year: i32,
    /// 1 through 4.
    pub quarter: u32,
}

impl FiscalQuarter {
    pub fn containing(date: NaiveDate) -> Self {
        FiscalQuarter {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    pub fn current() -> Self {
        FiscalQuarter::containing(Utc::now().date_naive())
    }

    pub fn next(self) -> Self {
        if self.quarter >= 4 {
            FiscalQuarter { year: self.year + 1, quarter: 1 }
        } else {
            FiscalQuarter { year: self.year, quarter: self.quarter + 1 }
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

/// Labels for the projection horizon, in order.
pub fn period_labels(start: FiscalQuarter) -> Vec<String> {
    std::iter::successors(Some(start), |q| Some(q.next()))
        .take(PROJECTION_PERIODS)
        .map(|q| q.to_string())
        .collect()
}

/// Thirteen quarters of customers, ARR and burn starting at the current quarter.
pub fn project_periods(inputs: &FinancialInputs, metrics: &Metrics) -> Vec<ProjectionPeriod> {
    project_periods_from(FiscalQuarter::current(), inputs, metrics)
}

/// Burn is held at `metrics.monthly_burn` for every period; only customers compound.
///
/// The reported customer count is recovered from the already-grown running
/// total divided by the growth factor, so it is the count the row's ARR was
/// computed from. It is fractional, like the running total.
pub fn project_periods_from(
    start: FiscalQuarter,
    inputs: &FinancialInputs,
    metrics: &Metrics,
) -> Vec<ProjectionPeriod> {
    let growth_factor = 1.0 + inputs.growth_rate / 100.0;
    let mut current_customers = inputs.customers;

    let periods: Vec<ProjectionPeriod> = period_labels(start)
        .into_iter()
        .map(|period| {
            let arr = current_customers * inputs.acv;
            let monthly_revenue = arr / 12.0;
            let net_burn = metrics.monthly_burn - monthly_revenue;

            current_customers *= growth_factor;
            // A -100% growth rate collapses the factor to zero; nothing to back out.
            let customers = if growth_factor == 0.0 {
                arr_customers(arr, inputs.acv)
            } else {
                current_customers / growth_factor
            };

            ProjectionPeriod {
                period,
                customers,
                arr,
                monthly_burn: metrics.monthly_burn,
                net_burn,
            }
        })
        .collect();

    debug!("Projected {} periods from {}", periods.len(), start);
    periods
}

fn arr_customers(arr: f64, acv: f64) -> f64 {
    if acv == 0.0 {
        0.0
    } else {
        arr / acv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::metrics::compute_metrics;
    use pretty_assertions::assert_eq;

    fn sample_inputs() -> FinancialInputs {
        FinancialInputs {
            acv: 350_000.0,
            customers: 3.0,
            growth_rate: 15.0,
            churn_rate: 10.0,
            team_size: 8.0,
            avg_salary: 140_000.0,
            infra_cost: 10_000.0,
            marketing_cost: 20_000.0,
        }
    }

    #[test]
    fn labels_roll_over_year_end() {
        let labels = period_labels(FiscalQuarter { year: 2026, quarter: 4 });
        assert_eq!(labels.len(), PROJECTION_PERIODS);
        assert_eq!(labels[0], "Q4 2026");
        assert_eq!(labels[1], "Q1 2027");
        assert_eq!(labels[12], "Q4 2029");
    }

    #[test]
    fn quarter_of_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(FiscalQuarter::containing(date), FiscalQuarter { year: 2026, quarter: 4 });
        let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(FiscalQuarter::containing(date), FiscalQuarter { year: 2025, quarter: 1 });
    }

    #[test]
    fn first_period_uses_starting_customers() {
        let inputs = sample_inputs();
        let metrics = compute_metrics(&inputs);
        let periods = project_periods_from(FiscalQuarter { year: 2026, quarter: 1 }, &inputs, &metrics);

        let first = &periods[0];
        assert_eq!(first.period, "Q1 2026");
        assert!((first.customers - 3.0).abs() < 1e-9);
        assert_eq!(first.arr, 1_050_000.0);
        assert_eq!(first.monthly_burn, metrics.monthly_burn);
        assert!((first.net_burn - (metrics.monthly_burn - 87_500.0)).abs() < 1e-6);
    }

    #[test]
    fn customers_compound_each_quarter() {
        let inputs = sample_inputs();
        let metrics = compute_metrics(&inputs);
        let periods = project_periods_from(FiscalQuarter { year: 2026, quarter: 1 }, &inputs, &metrics);

        // 3 * 1.15^4 = 5.247
        assert!((periods[4].arr - 3.0 * 1.15f64.powi(4) * 350_000.0).abs() < 1e-3);
        assert!((periods[4].customers - 3.0 * 1.15f64.powi(4)).abs() < 1e-9);
        assert!(periods[4].customers > 5.24 && periods[4].customers < 5.25);
        assert!(periods.iter().all(|p| p.monthly_burn == metrics.monthly_burn));
    }

    #[test]
    fn customers_are_not_rounded_and_match_row_arr() {
        let inputs = sample_inputs();
        let metrics = compute_metrics(&inputs);
        let periods = project_periods_from(FiscalQuarter { year: 2026, quarter: 1 }, &inputs, &metrics);

        // 3 * 1.15 = 3.45 customers in the second quarter
        assert!((periods[1].customers - 3.45).abs() < 1e-9);
        assert!(periods[1].customers.fract() != 0.0);
        for period in &periods {
            assert!((period.customers * inputs.acv - period.arr).abs() < 1e-3);
        }
    }

    #[test]
    fn revenue_overtaking_burn_turns_net_burn_negative() {
        let inputs = sample_inputs();
        let metrics = compute_metrics(&inputs);
        let periods = project_periods_from(FiscalQuarter { year: 2026, quarter: 1 }, &inputs, &metrics);

        assert!(periods[0].net_burn > 0.0);
        assert!(periods[12].net_burn < 0.0);
    }

    #[test]
    fn total_collapse_reports_zero_customers_after_first_period() {
        let inputs = FinancialInputs { growth_rate: -100.0, ..sample_inputs() };
        let metrics = compute_metrics(&inputs);
        let periods = project_periods_from(FiscalQuarter { year: 2026, quarter: 1 }, &inputs, &metrics);

        assert!((periods[0].customers - 3.0).abs() < 1e-9);
        assert_eq!(periods[1].customers, 0.0);
        assert_eq!(periods[1].arr, 0.0);
        assert!(periods.iter().all(|p| !p.customers.is_nan()));
    }
}
