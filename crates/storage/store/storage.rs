#[cfg(feature = "in_memory")]
use self::engines::in_memory::Store as InMemoryStore;
use self::error::StoreError;
use engines::api::StoreEngine;
use feemarket_core::{
    types::{GenesisState, Params},
    Decimal,
};
use std::sync::Arc;
use tracing::info;

mod engines;
pub mod error;

/// Persistence port of the fee market: governance params (including the
/// committed base fee) and the latest block gas wanted
#[derive(Debug, Clone)]
pub struct Store {
    engine: Arc<dyn StoreEngine>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum EngineType {
    #[cfg(feature = "in_memory")]
    InMemory,
}

impl Store {
    pub fn new(engine_type: EngineType) -> Result<Self, StoreError> {
        info!("Starting storage engine ({engine_type:?})");
        let store = match engine_type {
            #[cfg(feature = "in_memory")]
            EngineType::InMemory => Self {
                engine: Arc::new(InMemoryStore::new()),
            },
        };
        Ok(store)
    }

    /// Stores the fee market genesis state
    pub fn init_genesis(&self, genesis: &GenesisState) -> Result<(), StoreError> {
        info!(
            base_fee = ?genesis.params.base_fee,
            enable_height = genesis.params.enable_height,
            "Storing fee market genesis"
        );
        self.engine.set_params(genesis.params.clone())?;
        self.engine.set_block_gas_wanted(genesis.block_gas)
    }

    /// Exports the current state in genesis form
    pub fn export_genesis(&self) -> Result<GenesisState, StoreError> {
        Ok(GenesisState {
            params: self.get_params()?,
            block_gas: self.get_block_gas_wanted()?,
        })
    }

    pub fn get_params(&self) -> Result<Params, StoreError> {
        self.engine.get_params()?.ok_or(StoreError::MissingParams)
    }

    pub fn set_params(&self, params: Params) -> Result<(), StoreError> {
        self.engine.set_params(params)
    }

    /// Returns the committed base fee, `None` if the fee market never set one
    pub fn get_base_fee(&self) -> Result<Option<Decimal>, StoreError> {
        Ok(self.get_params()?.base_fee)
    }

    pub fn set_base_fee(&self, base_fee: Decimal) -> Result<(), StoreError> {
        self.engine.set_base_fee(base_fee)
    }

    pub fn get_block_gas_wanted(&self) -> Result<u64, StoreError> {
        self.engine.get_block_gas_wanted()
    }

    pub fn set_block_gas_wanted(&self, gas_wanted: u64) -> Result<(), StoreError> {
        self.engine.set_block_gas_wanted(gas_wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "in_memory")]
    #[test]
    fn test_in_memory_store() {
        test_store_suite(EngineType::InMemory);
    }

    fn test_store_suite(engine_type: EngineType) {
        run_test(&test_missing_params, engine_type);
        run_test(&test_store_genesis, engine_type);
        run_test(&test_store_base_fee, engine_type);
        run_test(&test_store_block_gas_wanted, engine_type);
    }

    fn run_test(test_func: &dyn Fn(Store), engine_type: EngineType) {
        let store = Store::new(engine_type).expect("Failed to create test store");
        test_func(store);
    }

    fn test_missing_params(store: Store) {
        assert!(matches!(store.get_params(), Err(StoreError::MissingParams)));
        assert!(matches!(
            store.set_base_fee(Decimal::one()),
            Err(StoreError::MissingParams)
        ));
    }

    fn test_store_genesis(store: Store) {
        let genesis = GenesisState {
            params: Params {
                enable_height: 3,
                ..Default::default()
            },
            block_gas: 42,
        };
        store.init_genesis(&genesis).unwrap();
        assert_eq!(store.export_genesis().unwrap(), genesis);
    }

    fn test_store_base_fee(store: Store) {
        let params = Params {
            base_fee: None,
            ..Default::default()
        };
        store.set_params(params).unwrap();
        assert_eq!(store.get_base_fee().unwrap(), None);

        let fee = Decimal::from_u64(875_000_000);
        store.set_base_fee(fee).unwrap();
        assert_eq!(store.get_base_fee().unwrap(), Some(fee));
        assert_eq!(store.get_params().unwrap().base_fee, Some(fee));
    }

    fn test_store_block_gas_wanted(store: Store) {
        assert_eq!(store.get_block_gas_wanted().unwrap(), 0);
        store.set_block_gas_wanted(2_500_000).unwrap();
        assert_eq!(store.get_block_gas_wanted().unwrap(), 2_500_000);
    }
}
