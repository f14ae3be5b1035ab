use crate::parsing::LoadedEvents;
use crate::structs::LedgerEvent;

/* Merge the three event streams into the single chronological sequence the
reducer folds over.

Ordering key is (date, priority): dividend = 1, exchange = 2, trade = 3, so
a day's inflows are recognized before its outflows. The sort must be stable:
two same-day events of the same kind keep the order their log emitted them
in, which is observable through the applied rates. */
pub fn build_timeline(loaded: LoadedEvents) -> Vec<LedgerEvent> {
    let mut timeline = loaded.exchanges;
    timeline.extend(loaded.dividends);
    timeline.extend(loaded.trades);
    timeline.sort_by_key(|event| (event.date(), event.priority()));
    return timeline;
}
