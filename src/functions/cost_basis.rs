use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::structs::{AppliedBasis, EngineConfig, LedgerEvent, LedgerReport, LedgerState};

/* The cost-basis reducer: a left fold over the timeline from (0, 0).

- exchange(u, k):  U += u, K += k
- dividend(u, r):  U += u, K += u * r   (its own rate, never the average:
                   dividends carry an externally-known FX and must not
                   revalue existing holdings)
- trade(c):        the pre-trade average K / U is the basis stamped on the
                   buy, K is debited by c * avg (clamped at 0), then U -= c

A buy placed while no USD is held gets the fallback rate stamped. A buy
larger than the balance lets U go negative arithmetically (an ingestion bug
upstream, tolerated here) while K stays clamped at 0.

All arithmetic stays unrounded inside the fold; only the final rate is
rounded, to 8 decimals. */
pub fn replay(timeline: &[LedgerEvent], config: &EngineConfig) -> LedgerReport {
    let mut state = LedgerState::default();
    let mut applied = Vec::new();

    for event in timeline {
        match event {
            LedgerEvent::Exchange { usd, krw, .. } => {
                state.usd_balance += usd;
                state.krw_cost += krw;
            }
            LedgerEvent::Dividend { usd, ex_rate, .. } => {
                state.usd_balance += usd;
                state.krw_cost += usd * ex_rate;
            }
            LedgerEvent::Trade {
                date,
                ticker,
                qty,
                price_usd,
            } => {
                let cost_usd = qty * price_usd;
                let rate = if state.usd_balance > dec!(0) {
                    let avg = state.krw_cost / state.usd_balance;
                    let used_krw = cost_usd * avg;
                    state.krw_cost = Decimal::max(dec!(0), state.krw_cost - used_krw);
                    avg
                } else {
                    config.fallback_rate
                };
                state.usd_balance -= cost_usd;
                if state.usd_balance == dec!(0) {
                    // zero balance resets cost, regardless of division residue
                    state.krw_cost = dec!(0);
                }
                applied.push(AppliedBasis {
                    date: *date,
                    ticker: ticker.clone(),
                    cost_usd,
                    rate,
                });
            }
        }
    }

    let final_rate = state.average_rate(config);
    return LedgerReport {
        state,
        applied,
        final_rate,
    };
}
