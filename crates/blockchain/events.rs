use feemarket_core::{types::BlockNumber, Decimal};
use serde::Serialize;

pub const EVENT_TYPE_BLOCK_GAS: &str = "block_gas";
pub const EVENT_TYPE_FEE_MARKET: &str = "fee_market";

pub const ATTRIBUTE_KEY_HEIGHT: &str = "height";
pub const ATTRIBUTE_KEY_AMOUNT: &str = "amount";
pub const ATTRIBUTE_KEY_BASE_FEE: &str = "base_fee";

/// Events produced while finalizing a block. They are returned to the caller,
/// which is in charge of publishing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeeMarketEvent {
    /// Gas wanted committed for the block
    BlockGas { height: BlockNumber, amount: u64 },
    /// New base fee committed for the next block
    FeeMarket { base_fee: Decimal },
}

impl FeeMarketEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            FeeMarketEvent::BlockGas { .. } => EVENT_TYPE_BLOCK_GAS,
            FeeMarketEvent::FeeMarket { .. } => EVENT_TYPE_FEE_MARKET,
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            FeeMarketEvent::BlockGas { height, amount } => vec![
                (ATTRIBUTE_KEY_HEIGHT, height.to_string()),
                (ATTRIBUTE_KEY_AMOUNT, amount.to_string()),
            ],
            FeeMarketEvent::FeeMarket { base_fee } => {
                vec![(ATTRIBUTE_KEY_BASE_FEE, base_fee.to_string())]
            }
        }
    }
}
