use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::LoadError;
use crate::parsing::load_events;
use crate::store::EventStore;
use crate::structs::{EngineConfig, LedgerReport};

use super::{build_timeline, replay};

/* Full replay against a fresh store snapshot: events are loaded, merged
into the timeline and folded. Callers that only want the headline number use
current_average_rate below. */
pub fn replay_ledger<S: EventStore>(
    store: &S,
    config: &EngineConfig,
) -> Result<LedgerReport, LoadError> {
    let snapshot = store
        .snapshot()
        .map_err(|e| LoadError::new(e.to_string()))?;
    let loaded = load_events(&snapshot)?;
    let timeline = build_timeline(loaded);
    debug!("replaying {} ledger events", timeline.len());
    return Ok(replay(&timeline, config));
}

/* The basis query: the effective KRW-per-USD cost of the dollars currently
held, the rate stamped onto a new buy at ingest time.

Never fails and never panics. Any store or load problem is logged and
answered with the configured fallback rate: for a personal dashboard,
availability beats accuracy. Every call replays from a fresh snapshot, so
repeated calls against an unchanged store return the same number. */
pub fn current_average_rate<S: EventStore>(store: &S, config: &EngineConfig) -> Decimal {
    match replay_ledger(store, config) {
        Ok(report) => return report.final_rate,
        Err(e) => {
            warn!("basis replay failed, answering fallback rate: {}", e);
            return config.fallback_rate.round_dp(8);
        }
    }
}
