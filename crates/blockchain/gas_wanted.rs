use feemarket_core::{
    types::{BlockGasState, Params},
    Decimal,
};
use tracing::{debug, error};

use crate::error::{FeeMarketError, GasQuantity};

/// Calculates the block gas wanted from the gas declared by the block's
/// transactions and the gas they actually consumed.
///
/// To prevent base fee manipulation through under-declared demand the result
/// is `max(gas_wanted * min_gas_multiplier, gas_used)`, so metered usage
/// always dominates.
///
/// The result is stored as the block gas wanted and drives the base fee
/// adjustment. Both inputs must fit in an i64.
pub fn calculate_block_gas_wanted(
    state: &BlockGasState,
    params: &Params,
) -> Result<u64, FeeMarketError> {
    let Some(gas_used) = state.consumed_gas() else {
        let err = FeeMarketError::GasMeterMissing;
        error!(height = state.height, "{err}");
        return Err(err);
    };
    let gas_wanted = state.transient_gas_wanted;

    check_int64(GasQuantity::GasWanted, gas_wanted)?;
    check_int64(GasQuantity::GasUsed, gas_used)?;

    // Both factors are bounded (i64 and [0, 1]), the product can't overflow
    let limited_gas_wanted = Decimal::from_u64(gas_wanted)
        .checked_mul(&params.min_gas_multiplier)
        .map_err(|_| overflow(GasQuantity::GasWanted, gas_wanted))?;

    let updated_gas_wanted = limited_gas_wanted
        .max(Decimal::from_u64(gas_used))
        .truncate_u64()
        .ok_or_else(|| overflow(GasQuantity::GasWanted, gas_wanted))?;

    debug!(
        height = state.height,
        gas_wanted,
        gas_used,
        updated_gas_wanted,
        "Calculated block gas wanted"
    );
    Ok(updated_gas_wanted)
}

fn check_int64(quantity: GasQuantity, value: u64) -> Result<(), FeeMarketError> {
    if i64::try_from(value).is_err() {
        return Err(overflow(quantity, value));
    }
    Ok(())
}

fn overflow(quantity: GasQuantity, value: u64) -> FeeMarketError {
    let err = FeeMarketError::ArithmeticOverflow { quantity, value };
    error!("{err}");
    err
}
