use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use feemarket_blockchain::{end_block, EndBlockOutcome};
use feemarket_core::types::{BlockGasState, BlockNumber, ConsensusParams, GasMeterError, GenesisState};
use feemarket_storage::{EngineType, Store};
use serde::Deserialize;
use tracing::{info, warn};

/// Blocks to replay on top of a genesis
#[derive(Debug, Deserialize)]
pub struct ReplayFile {
    #[serde(default)]
    pub consensus_params: ConsensusParams,
    pub blocks: Vec<ReplayBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ReplayBlock {
    /// Gas consumed by the block's transactions
    pub gas_used: u64,
    /// Gas declared by the block's transactions
    pub gas_wanted: u64,
    /// Overrides the consensus max gas for this block
    #[serde(default)]
    pub max_gas: Option<i64>,
}

pub fn read_genesis_file(path: &Path) -> anyhow::Result<GenesisState> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open genesis file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("Failed to decode genesis file")
}

pub fn read_replay_file(path: &Path) -> anyhow::Result<ReplayFile> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open blocks file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("Failed to decode blocks file")
}

/// Runs every block through the end block logic, in order, returning the
/// outcome of each one
pub fn replay(
    genesis: &GenesisState,
    replay_file: &ReplayFile,
    start_height: BlockNumber,
) -> anyhow::Result<Vec<EndBlockOutcome>> {
    let store = Store::new(EngineType::InMemory)?;
    store.init_genesis(genesis)?;

    let mut outcomes = Vec::with_capacity(replay_file.blocks.len());
    for (height, block) in (start_height..).zip(&replay_file.blocks) {
        let consensus_params = match block.max_gas {
            Some(max_gas) => ConsensusParams::with_max_gas(max_gas),
            None => replay_file.consensus_params,
        };

        let mut state = BlockGasState::new(height, &consensus_params);
        match state.consume_gas(block.gas_used, "replay") {
            Ok(()) => {}
            // The meter keeps the consumption capped at the block limit
            Err(err @ GasMeterError::OutOfGas { .. }) => warn!(height, "{err}"),
            Err(err) => return Err(err).context(format!("Invalid gas used at height {height}")),
        }
        state
            .add_transient_gas_wanted(block.gas_wanted)
            .with_context(|| format!("Invalid gas wanted at height {height}"))?;

        let outcome = end_block(&store, &state)
            .with_context(|| format!("Failed to finalize block {height}"))?;
        outcomes.push(outcome);
    }

    info!(
        blocks = outcomes.len(),
        base_fee = ?store.get_base_fee()?,
        "Replay finished"
    );
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use feemarket_core::Decimal;

    use super::*;

    #[test]
    fn replay_test_data() {
        let genesis = read_genesis_file(Path::new("../../test_data/genesis.json")).unwrap();
        let replay_file = read_replay_file(Path::new("../../test_data/blocks.json")).unwrap();
        let outcomes = replay(&genesis, &replay_file, 1).unwrap();

        let gas_wanted: Vec<u64> = outcomes.iter().map(|o| o.gas_wanted).collect();
        assert_eq!(gas_wanted, vec![100, 100, 50, 0, 30, 90]);

        let base_fees: Vec<Decimal> = outcomes.iter().filter_map(|o| o.base_fee).collect();
        let expected: Vec<Decimal> = [
            "984375000",
            "1107421875",
            "1107421875",
            "968994140.625",
            "920544433.59375",
            "1012598876.953125",
        ]
        .iter()
        .map(|fee| fee.parse().unwrap())
        .collect();
        assert_eq!(base_fees, expected);
    }

    #[test]
    fn replay_starting_at_enable_height_seeds_base_fee() {
        let genesis = read_genesis_file(Path::new("../../test_data/genesis.json")).unwrap();
        let replay_file = read_replay_file(Path::new("../../test_data/blocks.json")).unwrap();
        let outcomes = replay(&genesis, &replay_file, 0).unwrap();
        assert_eq!(outcomes[0].base_fee, genesis.params.base_fee);
    }

    #[test]
    fn per_block_max_gas_overrides_consensus() {
        let replay_file: ReplayFile = serde_json::from_str(
            r#"{"blocks": [{"gas_used": 5000, "gas_wanted": 0, "max_gas": 1000}]}"#,
        )
        .unwrap();
        let outcomes = replay(&GenesisState::default(), &replay_file, 1).unwrap();
        // Gas used capped at the block limit
        assert_eq!(outcomes[0].gas_wanted, 1000);
        // 1000000000 + 1000000000 * 500 / 500 / 8
        assert_eq!(outcomes[0].base_fee, Some(Decimal::from_u64(1_125_000_000)));
    }
}
