// src/services/pipeline.rs
use log::debug;

use crate::models::{ActualsSnapshot, Deal};

pub const CLOSED_STAGE: &str = "Closed";
pub const ACTIVE_STATUS: &str = "active";

/// Reduce the CRM's deal list to booked revenue and pipeline totals.
/// Stage and status comparisons are exact.
pub fn aggregate_pipeline(deals: &[Deal]) -> ActualsSnapshot {
    let snapshot = deals.iter().fold(ActualsSnapshot::default(), |mut acc, deal| {
        if deal.stage == CLOSED_STAGE {
            acc.actual_arr += deal.value;
            acc.actual_customer_count += 1;
        }
        if deal.status == ACTIVE_STATUS {
            acc.active_deals_count += 1;
        }
        acc.pipeline_value += deal.value;
        acc
    });
    debug!("Aggregated {} deals: {:?}", deals.len(), snapshot);
    snapshot
}
