use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/* The Event Store is three append-only tabular logs written by the ingest
side (chat-receipt parsers). The core only ever reads them.

A basis query must see a consistent view of all three logs, so the contract
is a single snapshot() call that materializes everything up front: once the
StoreSnapshot is returned, reduction never touches the store again, and
concurrent writers can only affect the next query. */
pub trait EventStore {
    fn snapshot(&self) -> Result<StoreSnapshot, StoreError>;
}

/* One log, as raw cells. Rows keep the order the store returned them in:
that order is the tie-break for same-day events of the same kind and is
observable in the output. */
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        return Table { headers, rows };
    }

    /* Cell accessor tolerating short rows: a missing cell reads as "". */
    pub fn cell<'a>(&'a self, row: &'a [String], index: usize) -> &'a str {
        return row.get(index).map(|s| s.as_str()).unwrap_or("");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub exchange: Table,
    pub dividend: Table,
    pub trade: Table,
}
