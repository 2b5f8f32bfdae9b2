use std::fmt;

use thiserror::Error;

use feemarket_storage::error::StoreError;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Fee market error: {0}")]
    FeeMarket(#[from] FeeMarketError),
    #[error("DB error: {0}")]
    StoreError(#[from] StoreError),
}

/// Errors that abort the finalization of a block
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeMarketError {
    #[error("Block gas meter is nil when setting block gas wanted")]
    GasMeterMissing,
    #[error("Integer overflow by integer type conversion. {quantity} > MaxInt64. {quantity}: {value}")]
    ArithmeticOverflow { quantity: GasQuantity, value: u64 },
}

/// Gas figure involved in an arithmetic overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasQuantity {
    GasWanted,
    GasUsed,
}

impl fmt::Display for GasQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasQuantity::GasWanted => write!(f, "Gas wanted"),
            GasQuantity::GasUsed => write!(f, "Gas used"),
        }
    }
}
