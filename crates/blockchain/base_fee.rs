use std::cmp::Ordering;

use feemarket_core::{
    types::{BlockNumber, Params},
    Decimal, DecimalError,
};
use tracing::debug;

// Calculates the base fee committed at the end of the block at `block_height`,
// EIP-1559 style, from the parent base fee held in `params` and the block's
// reconciled gas wanted.
//
// Returns None when the fee market is disabled at this height, or when the
// fee can't be computed (no parent base fee, degenerate limits, arithmetic
// overflow). In every None case the stored base fee must be left untouched.
pub fn calculate_base_fee(
    params: &Params,
    block_height: BlockNumber,
    consensus_max_gas: i64,
    gas_wanted: u64,
) -> Option<Decimal> {
    if !params.is_base_fee_enabled(block_height) {
        return None;
    }

    // First EIP-1559 block: seed with the governance base fee
    if block_height == params.enable_height {
        return params.base_fee;
    }

    let Some(parent_base_fee) = params.base_fee else {
        debug!(block_height, "Skipping base fee update, no parent base fee");
        return None;
    };

    // The adjustment is driven by the reconciled gas wanted, never by the raw
    // gas used of the block.
    let parent_gas_used = gas_wanted;

    // Any negative max gas (-1 by convention) means the block gas is unlimited
    let gas_limit = u64::try_from(consensus_max_gas).unwrap_or(u64::MAX);

    let Some(parent_gas_target) = gas_limit.checked_div(u64::from(params.elasticity_multiplier))
    else {
        debug!(block_height, "Skipping base fee update, elasticity multiplier is zero");
        return None;
    };

    if parent_gas_target == 0 {
        return Some(Decimal::zero());
    }

    let base_fee = match parent_gas_used.cmp(&parent_gas_target) {
        Ordering::Equal => Ok(parent_base_fee),
        Ordering::Greater => {
            let gas_used_delta = parent_gas_used - parent_gas_target;

            base_fee_delta(
                &parent_base_fee,
                gas_used_delta,
                parent_gas_target,
                params.base_fee_change_denominator,
            )
            .and_then(|delta| parent_base_fee.checked_add(&delta.max(Decimal::one())))
        }
        Ordering::Less => {
            let gas_used_delta = parent_gas_target - parent_gas_used;

            // The min gas price is the lower bound of the base fee
            base_fee_delta(
                &parent_base_fee,
                gas_used_delta,
                parent_gas_target,
                params.base_fee_change_denominator,
            )
            .and_then(|delta| parent_base_fee.checked_sub(&delta))
            .map(|base_fee| base_fee.max(params.min_gas_price))
        }
    };

    base_fee
        .map_err(|err| {
            debug!(
                block_height,
                parent_gas_used, parent_gas_target, "Skipping base fee update: {err}"
            )
        })
        .ok()
}

/// parent_base_fee * gas_used_delta / parent_gas_target / denominator
fn base_fee_delta(
    parent_base_fee: &Decimal,
    gas_used_delta: u64,
    parent_gas_target: u64,
    base_fee_change_denominator: u32,
) -> Result<Decimal, DecimalError> {
    parent_base_fee
        .checked_mul_int(gas_used_delta)?
        .checked_quo_int(parent_gas_target)?
        .checked_quo_int(u64::from(base_fee_change_denominator))
}
