use crate::error::StoreError;
use feemarket_core::{types::Params, Decimal};
use std::sync::{Arc, Mutex, MutexGuard};

use super::api::StoreEngine;

#[derive(Default, Clone, Debug)]
pub struct Store(Arc<Mutex<StoreInner>>);

#[derive(Default, Debug)]
struct StoreInner {
    params: Option<Params>,
    block_gas_wanted: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.0.lock().map_err(|_| StoreError::LockError)
    }
}

impl StoreEngine for Store {
    fn get_params(&self) -> Result<Option<Params>, StoreError> {
        Ok(self.inner()?.params.clone())
    }

    fn set_params(&self, params: Params) -> Result<(), StoreError> {
        self.inner()?.params = Some(params);
        Ok(())
    }

    fn set_base_fee(&self, base_fee: Decimal) -> Result<(), StoreError> {
        let mut store = self.inner()?;
        let params = store.params.as_mut().ok_or(StoreError::MissingParams)?;
        params.base_fee = Some(base_fee);
        Ok(())
    }

    fn get_block_gas_wanted(&self) -> Result<u64, StoreError> {
        Ok(self.inner()?.block_gas_wanted)
    }

    fn set_block_gas_wanted(&self, gas_wanted: u64) -> Result<(), StoreError> {
        self.inner()?.block_gas_wanted = gas_wanted;
        Ok(())
    }
}
