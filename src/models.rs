// src/models.rs
use serde::{Serialize, Deserialize};

/// Business assumptions feeding the operating metrics and the quarterly projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    /// Annual contract value per customer.
    pub acv: f64,
    pub customers: f64,
    /// Customer growth, percent per quarter.
    pub growth_rate: f64,
    /// Annual churn, percent.
    pub churn_rate: f64,
    pub team_size: f64,
    /// Yearly salary per team member.
    pub avg_salary: f64,
    /// Monthly infrastructure spend.
    pub infra_cost: f64,
    /// Monthly marketing spend.
    pub marketing_cost: f64,
}

/// Operating metrics derived from `FinancialInputs`.
///
/// `None` marks a value that is unbounded because its divisor was zero:
/// `ltv` and `ltv_cac_ratio` with zero churn, `runway_months` with zero burn,
/// `payback_months` with zero contract value. It serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub monthly_burn: f64,
    pub ltv: Option<f64>,
    pub cac: f64,
    pub arr: f64,
    pub runway_months: Option<i64>,
    pub ltv_cac_ratio: Option<f64>,
    pub payback_months: Option<f64>,
    pub gross_margin_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringInputs {
    pub planned_hires_near_term: f64,
    pub planned_hires_next_period: f64,
    pub new_hire_salary: f64,
    pub equity_percent_per_hire: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCosts {
    pub current_monthly_cost: f64,
    pub near_term_monthly_cost: f64,
    pub next_period_monthly_cost: f64,
    pub total_equity_allocated: f64,
    pub total_team_size: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseOfFunds {
    pub product_percent: f64,
    pub gtm_percent: f64,
    pub team_percent: f64,
    pub reserve_percent: f64,
}

impl UseOfFunds {
    pub fn total_percent(&self) -> f64 {
        self.product_percent + self.gtm_percent + self.team_percent + self.reserve_percent
    }

    /// True when the four categories account for exactly 100 percent of the raise.
    pub fn is_balanced(&self) -> bool {
        (self.total_percent() - 100.0).abs() < 1e-9
    }
}

/// Round terms. Money amounts are in millions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingInputs {
    pub target_raise: f64,
    pub pre_money_valuation: f64,
    pub lead_check: f64,
    pub esop_pool_percent: f64,
    pub use_of_funds: UseOfFunds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsAllocation {
    pub product: f64,
    pub gtm: f64,
    pub team: f64,
    pub reserve: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSummary {
    pub post_money: f64,
    pub dilution_percent: f64,
    /// Ownership of each founder after the round.
    pub founder_ownership_percent: f64,
    pub lead_check: f64,
    pub esop_pool_percent: f64,
    pub allocation: FundsAllocation,
    pub use_of_funds_total_percent: f64,
    pub use_of_funds_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeYearInputs {
    pub year2_team_size: f64,
    pub year3_team_size: f64,
    pub avg_salary: f64,
    pub year2_monthly_marketing: f64,
    pub year3_monthly_marketing: f64,
    pub year2_monthly_infra: f64,
    pub year3_monthly_infra: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeYearFundingSummary {
    pub year1_burn: f64,
    pub year2_monthly_burn: f64,
    pub year2_burn: f64,
    pub year3_monthly_burn: f64,
    pub year3_burn: f64,
    pub total_burn: f64,
    pub buffer: f64,
    /// Negative when current cash already covers the plan.
    pub total_to_raise: f64,
    /// Whole millions.
    pub recommended_raise: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPeriod {
    pub period: String,
    pub customers: f64,
    pub arr: f64,
    pub monthly_burn: f64,
    pub net_burn: f64,
}

/// A deal record as owned by the CRM collaborator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deal {
    pub stage: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualsSnapshot {
    #[serde(rename = "actualARR")]
    pub actual_arr: f64,
    pub actual_customer_count: usize,
    pub pipeline_value: f64,
    pub active_deals_count: usize,
}

/// Every input struct the dashboard edits, recomputed together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInputs {
    pub financial: FinancialInputs,
    pub hiring: HiringInputs,
    pub funding: FundingInputs,
    pub three_year: ThreeYearInputs,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureSource {
    Actual,
    Projected,
}

/// Headline ARR and customer count shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFigures {
    pub arr: f64,
    pub customers: f64,
    pub source: FigureSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel {
    pub metrics: Metrics,
    pub projection: Vec<ProjectionPeriod>,
    pub team_costs: TeamCosts,
    pub funding: FundingSummary,
    pub three_year: ThreeYearFundingSummary,
    pub actuals: ActualsSnapshot,
    pub display: DisplayFigures,
    pub issues: Vec<ValidationIssue>,
}
