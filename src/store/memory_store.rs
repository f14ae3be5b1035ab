use crate::errors::StoreError;

use super::{EventStore, StoreSnapshot, Table};

/* In-memory Event Store for tests and for callers that already hold the
rows (e.g. a spreadsheet transport that fetched all three sheets). */
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    snapshot: StoreSnapshot,
}

impl MemoryEventStore {
    pub fn new(exchange: Table, dividend: Table, trade: Table) -> Self {
        return MemoryEventStore {
            snapshot: StoreSnapshot {
                exchange,
                dividend,
                trade,
            },
        };
    }

    /* Three empty logs: the "no information yet" store. */
    pub fn empty() -> Self {
        return MemoryEventStore::default();
    }
}

impl EventStore for MemoryEventStore {
    fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        return Ok(self.snapshot.clone());
    }
}
