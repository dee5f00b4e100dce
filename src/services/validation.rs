// src/services/validation.rs
use crate::models::{
    FinancialInputs, FundingInputs, HiringInputs, ModelInputs, Severity, ThreeYearInputs, ValidationIssue,
};

/// Input checks run before the calculators. Nothing here changes a computed
/// value; the dashboard decides how to show the issues.
pub fn validate_inputs(inputs: &ModelInputs) -> Vec<ValidationIssue> {
    let mut issues = validate_financial(&inputs.financial);
    issues.extend(validate_hiring(&inputs.hiring));
    issues.extend(validate_funding(&inputs.funding));
    issues.extend(validate_three_year(&inputs.three_year));
    issues
}

pub fn validate_financial(inputs: &FinancialInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if inputs.churn_rate <= 0.0 {
        issues.push(issue(
            "financial.churnRate",
            Severity::Error,
            "churn rate must be above zero; LTV is unbounded",
        ));
    }
    percent_in_range(&mut issues, "financial.churnRate", inputs.churn_rate);
    if inputs.growth_rate > 100.0 || inputs.growth_rate < -100.0 {
        issues.push(issue(
            "financial.growthRate",
            Severity::Warning,
            "growth rate should be between -100 and 100 percent",
        ));
    }

    non_negative(&mut issues, "financial.acv", inputs.acv);
    non_negative(&mut issues, "financial.customers", inputs.customers);
    non_negative(&mut issues, "financial.teamSize", inputs.team_size);
    non_negative(&mut issues, "financial.avgSalary", inputs.avg_salary);
    non_negative(&mut issues, "financial.infraCost", inputs.infra_cost);
    non_negative(&mut issues, "financial.marketingCost", inputs.marketing_cost);
    issues
}

pub fn validate_hiring(hiring: &HiringInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    non_negative(&mut issues, "hiring.plannedHiresNearTerm", hiring.planned_hires_near_term);
    non_negative(&mut issues, "hiring.plannedHiresNextPeriod", hiring.planned_hires_next_period);
    non_negative(&mut issues, "hiring.newHireSalary", hiring.new_hire_salary);
    percent_in_range(&mut issues, "hiring.equityPercentPerHire", hiring.equity_percent_per_hire);
    issues
}

pub fn validate_funding(funding: &FundingInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    non_negative(&mut issues, "funding.targetRaise", funding.target_raise);
    non_negative(&mut issues, "funding.preMoneyValuation", funding.pre_money_valuation);
    non_negative(&mut issues, "funding.leadCheck", funding.lead_check);
    percent_in_range(&mut issues, "funding.esopPoolPercent", funding.esop_pool_percent);

    if funding.pre_money_valuation + funding.target_raise == 0.0 {
        issues.push(issue(
            "funding.preMoneyValuation",
            Severity::Warning,
            "post-money valuation is zero; dilution is reported as 0",
        ));
    }

    let split = &funding.use_of_funds;
    percent_in_range(&mut issues, "funding.useOfFunds.productPercent", split.product_percent);
    percent_in_range(&mut issues, "funding.useOfFunds.gtmPercent", split.gtm_percent);
    percent_in_range(&mut issues, "funding.useOfFunds.teamPercent", split.team_percent);
    percent_in_range(&mut issues, "funding.useOfFunds.reservePercent", split.reserve_percent);
    if !split.is_balanced() {
        issues.push(issue(
            "funding.useOfFunds",
            Severity::Warning,
            &format!("use of funds adds up to {}%, expected 100%", split.total_percent()),
        ));
    }
    issues
}

pub fn validate_three_year(three_year: &ThreeYearInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    non_negative(&mut issues, "threeYear.year2TeamSize", three_year.year2_team_size);
    non_negative(&mut issues, "threeYear.year3TeamSize", three_year.year3_team_size);
    non_negative(&mut issues, "threeYear.avgSalary", three_year.avg_salary);
    non_negative(&mut issues, "threeYear.year2MonthlyMarketing", three_year.year2_monthly_marketing);
    non_negative(&mut issues, "threeYear.year3MonthlyMarketing", three_year.year3_monthly_marketing);
    non_negative(&mut issues, "threeYear.year2MonthlyInfra", three_year.year2_monthly_infra);
    non_negative(&mut issues, "threeYear.year3MonthlyInfra", three_year.year3_monthly_infra);
    issues
}

fn issue(field: &str, severity: Severity, message: &str) -> ValidationIssue {
    ValidationIssue {
        field: field.to_string(),
        severity,
        message: message.to_string(),
    }
}

fn non_negative(issues: &mut Vec<ValidationIssue>, field: &str, value: f64) {
    if value < 0.0 {
        issues.push(issue(field, Severity::Error, "must not be negative"));
    }
}

fn percent_in_range(issues: &mut Vec<ValidationIssue>, field: &str, value: f64) {
    if !(0.0..=100.0).contains(&value) {
        issues.push(issue(field, Severity::Warning, "should be between 0 and 100 percent"));
    }
}
