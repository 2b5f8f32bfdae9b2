use std::fmt::Debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GasMeterError {
    #[error("Out of gas: {descriptor} consumed {consumed}, limit {limit}")]
    OutOfGas {
        descriptor: String,
        consumed: u64,
        limit: u64,
    },
    #[error("Gas overflow: {0}")]
    Overflow(String),
    #[error("Block gas meter is missing")]
    MissingMeter,
}

/// Tracks the gas consumed while applying the transactions of a block
pub trait GasMeter: Debug + Send + Sync {
    /// Gas consumed so far, which may exceed the limit
    fn gas_consumed(&self) -> u64;

    /// Gas consumed so far, capped at the limit
    fn gas_consumed_to_limit(&self) -> u64;

    fn limit(&self) -> u64;

    /// Adds `amount` to the consumed gas. Consumption is recorded even when it
    /// runs past the limit, in which case `OutOfGas` is returned.
    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasMeterError>;
}

/// Gas meter with a finite limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicGasMeter {
    limit: u64,
    consumed: u64,
}

impl BasicGasMeter {
    pub fn new(limit: u64) -> Self {
        BasicGasMeter { limit, consumed: 0 }
    }
}

impl GasMeter for BasicGasMeter {
    fn gas_consumed(&self) -> u64 {
        self.consumed
    }

    fn gas_consumed_to_limit(&self) -> u64 {
        self.consumed.min(self.limit)
    }

    fn limit(&self) -> u64 {
        self.limit
    }

    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasMeterError> {
        self.consumed = self
            .consumed
            .checked_add(amount)
            .ok_or_else(|| GasMeterError::Overflow(descriptor.to_string()))?;
        if self.consumed > self.limit {
            return Err(GasMeterError::OutOfGas {
                descriptor: descriptor.to_string(),
                consumed: self.consumed,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Gas meter without a limit, used when the consensus block gas is unlimited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfiniteGasMeter {
    consumed: u64,
}

impl InfiniteGasMeter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GasMeter for InfiniteGasMeter {
    fn gas_consumed(&self) -> u64 {
        self.consumed
    }

    fn gas_consumed_to_limit(&self) -> u64 {
        self.consumed
    }

    fn limit(&self) -> u64 {
        u64::MAX
    }

    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasMeterError> {
        self.consumed = self
            .consumed
            .checked_add(amount)
            .ok_or_else(|| GasMeterError::Overflow(descriptor.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_meter_caps_consumption_at_limit() {
        let mut meter = BasicGasMeter::new(100);
        meter.consume_gas(60, "tx1").unwrap();
        assert_eq!(meter.gas_consumed_to_limit(), 60);

        let err = meter.consume_gas(60, "tx2").unwrap_err();
        assert_eq!(
            err,
            GasMeterError::OutOfGas {
                descriptor: "tx2".to_string(),
                consumed: 120,
                limit: 100,
            }
        );
        assert_eq!(meter.gas_consumed(), 120);
        assert_eq!(meter.gas_consumed_to_limit(), 100);
    }

    #[test]
    fn basic_meter_consumes_up_to_max() {
        let mut meter = BasicGasMeter::new(u64::MAX);
        meter.consume_gas(u64::MAX, "test").unwrap();
        assert_eq!(meter.gas_consumed_to_limit(), u64::MAX);
        assert_eq!(
            meter.consume_gas(1, "test"),
            Err(GasMeterError::Overflow("test".to_string()))
        );
    }

    #[test]
    fn infinite_meter_never_runs_out() {
        let mut meter = InfiniteGasMeter::new();
        meter.consume_gas(1_000_000_000, "tx").unwrap();
        meter.consume_gas(1_000_000_000, "tx").unwrap();
        assert_eq!(meter.gas_consumed_to_limit(), 2_000_000_000);
        assert_eq!(meter.limit(), u64::MAX);
    }
}
