#[cfg(test)]
mod test {
    use std::{fs::File, io::BufReader};

    use crate::{end_block, EndBlockOutcome};

    use feemarket_core::{
        types::{BlockGasState, ConsensusParams, GenesisState},
        Decimal,
    };
    use feemarket_storage::{EngineType, Store};

    const MAX_GAS: i64 = 100;

    #[test]
    fn test_fee_market_lifecycle() {
        let store = test_store();

        // Below the enable height nothing is committed
        let outcome = run_block(&store, 1, 100, 100);
        assert_eq!(outcome.base_fee, None);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1000000000")));

        // Activation block seeds the governance base fee, whatever the usage
        let outcome = run_block(&store, 2, 100, 100);
        assert_eq!(outcome.base_fee, Some(fee("1000000000")));

        // Two congested blocks
        run_block(&store, 3, 100, 100);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1125000000")));
        run_block(&store, 4, 100, 100);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1265625000")));

        // Empty block
        run_block(&store, 5, 0, 0);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1107421875")));

        // At target
        run_block(&store, 6, 50, 50);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1107421875")));

        // Declaring no demand can't hide the metered usage
        let outcome = run_block(&store, 7, 30, 0);
        assert_eq!(outcome.gas_wanted, 30);
        assert_eq!(store.get_base_fee().unwrap(), Some(fee("1052050781.25")));
        assert_eq!(store.get_block_gas_wanted().unwrap(), 30);
    }

    #[test]
    fn test_under_declared_demand_is_floored() {
        let store = test_store();
        run_block(&store, 2, 0, 0);

        // Declared 180, only 0.5 of it counts: gas wanted 90 > target
        let outcome = run_block(&store, 3, 10, 180);
        assert_eq!(outcome.gas_wanted, 90);
        // 1000000000 + 1000000000 * 40 / 50 / 8
        assert_eq!(outcome.base_fee, Some(fee("1100000000")));
    }

    fn run_block(store: &Store, height: u64, gas_used: u64, gas_wanted: u64) -> EndBlockOutcome {
        let mut state = BlockGasState::new(height, &ConsensusParams::with_max_gas(MAX_GAS));
        state.consume_gas(gas_used, "test").unwrap();
        state.add_transient_gas_wanted(gas_wanted).unwrap();
        end_block(store, &state).unwrap()
    }

    fn fee(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn test_store() -> Store {
        // Get genesis
        let file = File::open("../../test_data/genesis-enable-height.json")
            .expect("Failed to open genesis file");
        let reader = BufReader::new(file);
        let genesis: GenesisState =
            serde_json::from_reader(reader).expect("Failed to deserialize genesis file");

        // Build store with genesis
        let store = Store::new(EngineType::InMemory).expect("Failed to build DB for testing");
        store
            .init_genesis(&genesis)
            .expect("Failed to add genesis state");
        store
    }
}
