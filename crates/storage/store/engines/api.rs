use feemarket_core::{types::Params, Decimal};
use std::fmt::Debug;

use crate::error::StoreError;

pub trait StoreEngine: Debug + Send + Sync {
    /// Obtain the current fee market params
    fn get_params(&self) -> Result<Option<Params>, StoreError>;

    /// Replace the fee market params
    fn set_params(&self, params: Params) -> Result<(), StoreError>;

    /// Update the base fee held in the params, which the next block reads as
    /// its parent base fee
    fn set_base_fee(&self, base_fee: Decimal) -> Result<(), StoreError>;

    /// Obtain the gas wanted committed by the latest finalized block
    fn get_block_gas_wanted(&self) -> Result<u64, StoreError>;

    /// Store the gas wanted of the block being finalized
    fn set_block_gas_wanted(&self, gas_wanted: u64) -> Result<(), StoreError>;
}
