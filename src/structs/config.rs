use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/* Engine configuration passed in by the caller, not a compile-time constant.
The fallback rate is what the basis query answers when no USD is held or
when the store cannot be read: callers treat it as "no information yet". */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub fallback_rate: Decimal,
}

impl EngineConfig {
    pub fn new(fallback_rate: Decimal) -> Self {
        return EngineConfig { fallback_rate };
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        return EngineConfig {
            fallback_rate: dec!(1450.0),
        };
    }
}
