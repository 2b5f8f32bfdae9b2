use serde::{Deserialize, Serialize};

use super::{BasicGasMeter, GasMeter, GasMeterError, InfiniteGasMeter, UNLIMITED_MAX_GAS};

pub type BlockNumber = u64;

/// Block size limits agreed by consensus
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsensusParams {
    pub block: Option<BlockParams>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockParams {
    /// Max block size in bytes, -1 for unlimited
    #[serde(with = "crate::serde_utils::i64::num_or_dec_str")]
    pub max_bytes: i64,
    /// Max gas per block, -1 for unlimited
    #[serde(with = "crate::serde_utils::i64::num_or_dec_str")]
    pub max_gas: i64,
}

impl ConsensusParams {
    pub fn with_max_gas(max_gas: i64) -> Self {
        ConsensusParams {
            block: Some(BlockParams {
                max_bytes: -1,
                max_gas,
            }),
        }
    }

    /// Max block gas, -1 when unlimited or when no block params are set
    pub fn max_gas(&self) -> i64 {
        self.block
            .map(|block| block.max_gas)
            .unwrap_or(UNLIMITED_MAX_GAS)
    }
}

/// Gas accounting of the block being built. Created at block start and
/// discarded once the block is finalized.
#[derive(Debug)]
pub struct BlockGasState {
    pub height: BlockNumber,
    /// Meter of the gas consumed by executed transactions
    pub gas_meter: Option<Box<dyn GasMeter>>,
    /// Sum of the gas declared by the transactions selected for the block
    pub transient_gas_wanted: u64,
    /// Consensus max block gas, -1 for unlimited
    pub consensus_max_gas: i64,
}

impl BlockGasState {
    /// Creates the state of a new block, with a gas meter bounded by the
    /// consensus max gas
    pub fn new(height: BlockNumber, consensus_params: &ConsensusParams) -> Self {
        let consensus_max_gas = consensus_params.max_gas();
        let gas_meter: Box<dyn GasMeter> = match u64::try_from(consensus_max_gas) {
            Ok(limit) => Box::new(BasicGasMeter::new(limit)),
            Err(_) => Box::new(InfiniteGasMeter::new()),
        };
        BlockGasState {
            height,
            gas_meter: Some(gas_meter),
            transient_gas_wanted: 0,
            consensus_max_gas,
        }
    }

    /// Creates a block state with no gas meter attached
    pub fn without_gas_meter(height: BlockNumber, consensus_params: &ConsensusParams) -> Self {
        BlockGasState {
            height,
            gas_meter: None,
            transient_gas_wanted: 0,
            consensus_max_gas: consensus_params.max_gas(),
        }
    }

    pub fn with_gas_meter(mut self, gas_meter: Box<dyn GasMeter>) -> Self {
        self.gas_meter = Some(gas_meter);
        self
    }

    pub fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasMeterError> {
        self.gas_meter
            .as_mut()
            .ok_or(GasMeterError::MissingMeter)?
            .consume_gas(amount, descriptor)
    }

    /// Adds the gas declared by a selected transaction to the block gas wanted
    pub fn add_transient_gas_wanted(&mut self, amount: u64) -> Result<u64, GasMeterError> {
        self.transient_gas_wanted = self
            .transient_gas_wanted
            .checked_add(amount)
            .ok_or_else(|| GasMeterError::Overflow("transient gas wanted".to_string()))?;
        Ok(self.transient_gas_wanted)
    }

    /// Gas consumed capped at the block limit, `None` if no meter is attached
    pub fn consumed_gas(&self) -> Option<u64> {
        self.gas_meter
            .as_ref()
            .map(|meter| meter.gas_consumed_to_limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_gas_defaults_to_unlimited() {
        assert_eq!(ConsensusParams::default().max_gas(), -1);
        assert_eq!(ConsensusParams::with_max_gas(100).max_gas(), 100);
    }

    #[test]
    fn new_block_meter_follows_consensus_limit() {
        let mut state = BlockGasState::new(1, &ConsensusParams::with_max_gas(100));
        assert_eq!(state.consumed_gas(), Some(0));
        assert!(state.consume_gas(150, "tx").is_err());
        assert_eq!(state.consumed_gas(), Some(100));

        let mut unlimited = BlockGasState::new(1, &ConsensusParams::default());
        unlimited.consume_gas(1 << 40, "tx").unwrap();
        assert_eq!(unlimited.consumed_gas(), Some(1 << 40));
    }

    #[test]
    fn missing_meter_is_distinct_from_zero() {
        let mut state = BlockGasState::without_gas_meter(1, &ConsensusParams::default());
        assert_eq!(state.consumed_gas(), None);
        assert_eq!(
            state.consume_gas(1, "tx"),
            Err(GasMeterError::MissingMeter)
        );
        let state = state.with_gas_meter(Box::new(BasicGasMeter::new(10)));
        assert_eq!(state.consumed_gas(), Some(0));
    }

    #[test]
    fn transient_gas_wanted_accumulates() {
        let mut state = BlockGasState::new(1, &ConsensusParams::default());
        assert_eq!(state.add_transient_gas_wanted(21_000).unwrap(), 21_000);
        assert_eq!(state.add_transient_gas_wanted(50_000).unwrap(), 71_000);
        assert!(state.add_transient_gas_wanted(u64::MAX).is_err());
        assert_eq!(state.transient_gas_wanted, 71_000);
    }

    #[test]
    fn deserialize_consensus_params() {
        let params: ConsensusParams =
            serde_json::from_str(r#"{"block": {"max_bytes": "22020096", "max_gas": "-1"}}"#)
                .unwrap();
        assert_eq!(params.max_gas(), -1);
        let params: ConsensusParams = serde_json::from_str(r#"{"block": null}"#).unwrap();
        assert_eq!(params.max_gas(), -1);
    }
}
