use csv::ReaderBuilder;

use crate::errors::StoreError;

use super::{EventStore, StoreSnapshot, Table};

/* File-backed Event Store: one CSV file per log, headers on the first line.

Each snapshot() re-reads all three files completely before returning, so a
query always reduces over a self-consistent in-memory copy. Partially
written files are the writer's problem, not ours. */
#[derive(Debug, Clone)]
pub struct CsvEventStore {
    exchange_path: String,
    dividend_path: String,
    trade_path: String,
}

impl CsvEventStore {
    pub fn new(exchange_path: String, dividend_path: String, trade_path: String) -> Self {
        return CsvEventStore {
            exchange_path,
            dividend_path,
            trade_path,
        };
    }

    fn read_table(path: &str) -> Result<Table, StoreError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| StoreError::new(format!("{}: {}", path, e)))?;

        let headers = reader
            .headers()
            .map_err(|e| StoreError::new(format!("{}: {}", path, e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| StoreError::new(format!("{}: {}", path, e)))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }
        return Ok(Table::new(headers, rows));
    }
}

impl EventStore for CsvEventStore {
    fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        return Ok(StoreSnapshot {
            exchange: Self::read_table(&self.exchange_path)?,
            dividend: Self::read_table(&self.dividend_path)?,
            trade: Self::read_table(&self.trade_path)?,
        });
    }
}
