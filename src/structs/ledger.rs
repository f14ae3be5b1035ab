use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::EngineConfig;

/* The fold accumulator: how many USD we hold and how many KRW we paid, net
of what prior buys already consumed. Rebuilt from (0, 0) on every replay,
nothing is ever persisted. */
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub usd_balance: Decimal,
    pub krw_cost: Decimal,
}

impl LedgerState {
    /* The running KRW-per-USD average, or the configured fallback when no
    USD is held. Rounding to 8 decimals happens only here, at the terminal
    output, never inside the fold. */
    pub fn average_rate(&self, config: &EngineConfig) -> Decimal {
        if self.usd_balance > dec!(0) {
            return (self.krw_cost / self.usd_balance).round_dp(8);
        }
        return config.fallback_rate.round_dp(8);
    }
}

/* The basis stamped on one buy at the moment of reduction: a pure function
of the events strictly preceding it in timeline order. */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedBasis {
    pub date: NaiveDate,
    pub ticker: String,
    pub cost_usd: Decimal,
    pub rate: Decimal,
}

/* Full replay output, for callers that want more than the headline rate. */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub state: LedgerState,
    pub applied: Vec<AppliedBasis>,
    pub final_rate: Decimal,
}
