/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Serializable stand-in for an undefined/infinite profit factor
/// (an account with wins and no losses).
pub const PROFIT_FACTOR_SENTINEL: i64 = 999;
