pub mod serde_utils;
pub mod types;

pub use types::{Decimal, DecimalError};
