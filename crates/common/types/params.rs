use serde::{Deserialize, Serialize};

use super::{
    BlockNumber, Decimal, DEFAULT_BASE_FEE, DEFAULT_BASE_FEE_CHANGE_DENOMINATOR,
    DEFAULT_ELASTICITY_MULTIPLIER, DEFAULT_MIN_GAS_MULTIPLIER,
};

/// Fee market parameters, set by governance and read once per block
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Params {
    /// Disables the base fee calculation entirely
    #[serde(default)]
    pub no_base_fee: bool,
    /// Bounds the amount the base fee can change between blocks
    pub base_fee_change_denominator: u32,
    /// Bounds the maximum gas limit an EIP-1559 block may have
    pub elasticity_multiplier: u32,
    /// Height at which the base fee calculation is enabled
    #[serde(with = "crate::serde_utils::u64::num_or_dec_str")]
    pub enable_height: BlockNumber,
    /// Base fee for the parent block. The value committed at the end of a
    /// block becomes the parent base fee of the next one.
    #[serde(default)]
    pub base_fee: Option<Decimal>,
    /// Lower bound for the base fee
    pub min_gas_price: Decimal,
    /// Fraction of the declared gas wanted accounted for in the base fee
    /// adjustment, in `[0, 1]`
    pub min_gas_multiplier: Decimal,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            no_base_fee: false,
            base_fee_change_denominator: DEFAULT_BASE_FEE_CHANGE_DENOMINATOR,
            elasticity_multiplier: DEFAULT_ELASTICITY_MULTIPLIER,
            enable_height: 0,
            base_fee: Some(Decimal::from_u64(DEFAULT_BASE_FEE)),
            min_gas_price: Decimal::zero(),
            min_gas_multiplier: Decimal::with_precision(
                DEFAULT_MIN_GAS_MULTIPLIER.0,
                DEFAULT_MIN_GAS_MULTIPLIER.1,
            ),
        }
    }
}

impl Params {
    /// Returns true if the base fee is computed at the given height
    pub fn is_base_fee_enabled(&self, height: BlockNumber) -> bool {
        !self.no_base_fee && height >= self.enable_height
    }
}

/// Fee market section of the chain genesis
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenesisState {
    pub params: Params,
    /// Block gas wanted of the block preceding the chain start
    #[serde(default, with = "crate::serde_utils::u64::num_or_dec_str")]
    pub block_gas: u64,
}
