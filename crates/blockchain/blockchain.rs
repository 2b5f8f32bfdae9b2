pub mod base_fee;
pub mod error;
pub mod events;
pub mod gas_wanted;
mod smoke_test;

use base_fee::calculate_base_fee;
use error::ChainError;
use events::FeeMarketEvent;
use feemarket_core::{
    types::{BlockGasState, BlockNumber},
    Decimal,
};
use feemarket_storage::Store;
use gas_wanted::calculate_block_gas_wanted;
use serde::Serialize;
use tracing::{debug, info};

/// Result of finalizing the fee market for a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndBlockOutcome {
    pub height: BlockNumber,
    /// Gas wanted committed for the block
    pub gas_wanted: u64,
    /// Base fee committed for the next block, `None` if the stored fee was left untouched
    pub base_fee: Option<Decimal>,
    pub events: Vec<FeeMarketEvent>,
}

/// Finalizes the fee market at the end of a block, once every transaction has
/// been applied and the block gas meter is final.
///
/// Reconciles the block gas wanted and stores it, then computes the base fee
/// from the parent base fee in the stored params. A computed fee replaces the
/// stored one; an absent fee leaves it untouched and emits no fee event.
///
/// Fails, aborting the block, if the gas wanted can't be computed.
pub fn end_block(store: &Store, state: &BlockGasState) -> Result<EndBlockOutcome, ChainError> {
    let params = store.get_params()?;

    let gas_wanted = calculate_block_gas_wanted(state, &params)?;
    store.set_block_gas_wanted(gas_wanted)?;

    let mut events = vec![FeeMarketEvent::BlockGas {
        height: state.height,
        amount: gas_wanted,
    }];

    let base_fee = calculate_base_fee(&params, state.height, state.consensus_max_gas, gas_wanted);
    match base_fee {
        Some(base_fee) => {
            store.set_base_fee(base_fee)?;
            info!(height = state.height, gas_wanted, %base_fee, "Updated base fee");
            events.push(FeeMarketEvent::FeeMarket { base_fee });
        }
        None => debug!(height = state.height, gas_wanted, "Base fee not updated"),
    }

    Ok(EndBlockOutcome {
        height: state.height,
        gas_wanted,
        base_fee,
        events,
    })
}
