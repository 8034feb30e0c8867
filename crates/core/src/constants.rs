use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Target-currency units per source-currency unit used when no rates are configured (BRL per USD)
pub const DEFAULT_CONVERSION_RATE: Decimal = dec!(5.5);

/// Card surcharge percentage used when no rates are configured (IOF on card transactions)
pub const DEFAULT_SURCHARGE_RATE: Decimal = dec!(6.38);

/// Settings key holding the conversion rate
pub const CONVERSION_RATE_KEY: &str = "conversion_rate";

/// Settings key holding the surcharge rate
pub const SURCHARGE_RATE_KEY: &str = "surcharge_rate";
