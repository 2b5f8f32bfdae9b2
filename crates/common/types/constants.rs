// === Fee market defaults ===

/// Base fee seeded at the activation block unless governance overrides it
pub const DEFAULT_BASE_FEE: u64 = 1_000_000_000;

/// Bounds the amount the base fee can change between blocks
pub const DEFAULT_BASE_FEE_CHANGE_DENOMINATOR: u32 = 8;

/// Bounds the maximum gas limit an EIP-1559 block may have
pub const DEFAULT_ELASTICITY_MULTIPLIER: u32 = 2;

/// Fraction of the declared block gas wanted that counts towards the base fee
/// adjustment, as `(value, decimal places)`: 0.5
pub const DEFAULT_MIN_GAS_MULTIPLIER: (u64, usize) = (5, 1);

// === Consensus ===

/// Block max gas value meaning the block gas is unlimited
pub const UNLIMITED_MAX_GAS: i64 = -1;

// === Decimal representation ===

/// Number of fractional decimal digits
pub const DECIMAL_PRECISION: usize = 18;

/// Maximum bit length of a decimal's scaled integer (256 integer bits plus the
/// bits needed for the fractional digits)
pub const DECIMAL_MAX_BIT_LEN: usize = 256 + 60;
