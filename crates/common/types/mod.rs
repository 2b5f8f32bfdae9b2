mod block;
mod constants;
mod decimal;
mod gas;
mod params;

pub use block::*;
pub use constants::*;
pub use decimal::*;
pub use gas::*;
pub use params::*;
