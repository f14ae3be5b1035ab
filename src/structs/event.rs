use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* A LedgerEvent is one row of one of the three brokerage logs, after numeric
coercion. Events are never mutated once loaded: the ledger is rebuilt from
scratch on every query.

All amounts are magnitudes; the sign is given by the event kind when the
reducer applies it (exchanges and dividends are USD inflows, trades are USD
outflows).

## Same-day ordering
On a given day inflows are recognized before outflows, so a buy funded by a
same-day exchange sees that exchange's KRW cost in its basis. Dividends come
before exchanges because their KRW cost is fixed by their own ex_rate and
must not be perturbed by a same-day exchange. Hence the priorities:
dividend = 1, exchange = 2, trade = 3.
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    // KRW -> USD purchase. The implicit rate is krw / usd but is not stored.
    Exchange {
        date: NaiveDate,
        usd: Decimal,
        krw: Decimal,
    },
    // USD inflow whose KRW cost is usd * ex_rate, the broker-reported
    // same-day rate. It never uses the running average.
    Dividend {
        date: NaiveDate,
        ticker: String,
        usd: Decimal,
        ex_rate: Decimal,
    },
    // Buy only. The KRW debit is computed at reduction time, not stored.
    Trade {
        date: NaiveDate,
        ticker: String,
        qty: Decimal,
        price_usd: Decimal,
    },
}

impl LedgerEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            LedgerEvent::Exchange { date, .. } => *date,
            LedgerEvent::Dividend { date, .. } => *date,
            LedgerEvent::Trade { date, .. } => *date,
        }
    }

    /* Intra-day ordering priority, see module comment. Adding a new event
    kind means adding one row here and one arm in the reducer. */
    pub fn priority(&self) -> u8 {
        match self {
            LedgerEvent::Dividend { .. } => 1,
            LedgerEvent::Exchange { .. } => 2,
            LedgerEvent::Trade { .. } => 3,
        }
    }
}
