// src/services/funding.rs
use log::{debug, warn};

use crate::config::ModelConfig;
use crate::models::{FundingInputs, FundingSummary, FundsAllocation};
use super::calculations::round_to;

pub fn compute_funding(funding: &FundingInputs) -> FundingSummary {
    compute_funding_with(&ModelConfig::default(), funding)
}

/// Post-money valuation, dilution and founder ownership for a priced round.
///
/// A zero post-money valuation yields zero dilution. The use-of-funds split is
/// applied per category and is not forced to add up to the raise.
pub fn compute_funding_with(config: &ModelConfig, funding: &FundingInputs) -> FundingSummary {
    let post_money = funding.pre_money_valuation + funding.target_raise;

    let dilution_percent = if post_money == 0.0 {
        warn!("Post-money valuation is zero, reporting no dilution");
        0.0
    } else {
        funding.target_raise / post_money * 100.0
    };

    let founder_ownership_percent =
        round_to(config.founder_stake_percent * (1.0 - dilution_percent / 100.0), 1);

    let split = &funding.use_of_funds;
    let allocation = FundsAllocation {
        product: funding.target_raise * split.product_percent / 100.0,
        gtm: funding.target_raise * split.gtm_percent / 100.0,
        team: funding.target_raise * split.team_percent / 100.0,
        reserve: funding.target_raise * split.reserve_percent / 100.0,
    };

    let summary = FundingSummary {
        post_money,
        dilution_percent,
        founder_ownership_percent,
        lead_check: funding.lead_check,
        esop_pool_percent: funding.esop_pool_percent,
        allocation,
        use_of_funds_total_percent: split.total_percent(),
        use_of_funds_balanced: split.is_balanced(),
    };
    debug!("Computed funding summary: {:?}", summary);
    summary
}
