use chrono::NaiveDate;
use hashbrown::HashMap;
use log::warn;

use crate::errors::LoadError;
use crate::store::{StoreSnapshot, Table};
use crate::structs::LedgerEvent;
use crate::utils::coerce_decimal;

/* The Event Loader: raw log snapshot in, typed event streams out.

Each stream keeps the source row order. That order is load-bearing: the
timeline sort is stable and same-day events of the same kind must reduce in
the order the log emitted them. */
#[derive(Debug, Clone, Default)]
pub struct LoadedEvents {
    pub exchanges: Vec<LedgerEvent>,
    pub dividends: Vec<LedgerEvent>,
    pub trades: Vec<LedgerEvent>,
}

/* Column names per log, as written by the ingest side. Only the columns the
reducer needs are required; the rest of the row is carried by the store but
never read here. The Ex_Rate stamped on a trade row in particular is
informational output of a past basis query and is deliberately ignored. */
const EXCHANGE_COLUMNS: [&str; 3] = ["Date", "KRW_Amount", "USD_Amount"];
const DIVIDEND_COLUMNS: [&str; 3] = ["Date", "Amount_USD", "Ex_Rate"];
const TRADE_COLUMNS: [&str; 3] = ["Date", "Qty", "Price_USD"];

pub fn load_events(snapshot: &StoreSnapshot) -> Result<LoadedEvents, LoadError> {
    let mut loaded = LoadedEvents::default();

    for_each_row(&snapshot.exchange, "Exchange_Log", &EXCHANGE_COLUMNS, |date, cells| {
        loaded.exchanges.push(LedgerEvent::Exchange {
            date,
            krw: coerce_decimal(cells[1]),
            usd: coerce_decimal(cells[2]),
        });
    })?;

    for_each_row(&snapshot.dividend, "Dividend_Log", &DIVIDEND_COLUMNS, |date, cells| {
        loaded.dividends.push(LedgerEvent::Dividend {
            date,
            ticker: cells[3].to_string(),
            usd: coerce_decimal(cells[1]),
            ex_rate: coerce_decimal(cells[2]),
        });
    })?;

    for_each_row(&snapshot.trade, "Trade_Log", &TRADE_COLUMNS, |date, cells| {
        loaded.trades.push(LedgerEvent::Trade {
            date,
            ticker: cells[3].to_string(),
            qty: coerce_decimal(cells[1]),
            price_usd: coerce_decimal(cells[2]),
        });
    })?;

    return Ok(loaded);
}

/* Walk one log. The callback receives the parsed date plus the raw cells of
the required columns ([0] = Date) and the Ticker cell in [3] ("" when the
log has no Ticker column). Rows with an unparseable date are dropped with a
warning instead of poisoning the whole query. */
fn for_each_row<F>(
    table: &Table,
    log_name: &str,
    required: &[&str; 3],
    mut emit: F,
) -> Result<(), LoadError>
where
    F: FnMut(NaiveDate, [&str; 4]),
{
    // An entirely empty log (no headers, no rows) is a valid empty stream
    if table.headers.is_empty() && table.rows.is_empty() {
        return Ok(());
    }

    let index: HashMap<&str, usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.as_str(), i))
        .collect();

    let mut columns = [0usize; 3];
    for (slot, name) in required.iter().enumerate() {
        columns[slot] = *index
            .get(name)
            .ok_or_else(|| LoadError::new(format!("{}: missing column {}", log_name, name)))?;
    }
    let ticker_column = index.get("Ticker").copied();

    for row in &table.rows {
        let date_cell = table.cell(row, columns[0]).trim();
        let date = match NaiveDate::parse_from_str(date_cell, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!("{}: dropping row with unparseable date {:?}", log_name, date_cell);
                continue;
            }
        };
        let ticker = ticker_column.map(|i| table.cell(row, i)).unwrap_or("");
        emit(
            date,
            [
                date_cell,
                table.cell(row, columns[1]),
                table.cell(row, columns[2]),
                ticker,
            ],
        );
    }
    return Ok(());
}
