//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{BotStats, EventType, LookupErrorKind, LookupType};

/// Logs the session counters, skipping empty categories.
pub fn print_bot_statistics(stats: &BotStats) {
    let total_events = stats.total_events();
    let total_errors = stats.total_errors();

    if total_events == 0 {
        info!("No events handled");
        return;
    }

    info!("Event Counts ({} total):", total_events);
    for event in EventType::iter() {
        let count = stats.get_event_count(event);
        if count > 0 {
            info!("   {}: {}", event.as_str(), count);
        }
    }

    let lookups: Vec<(LookupType, usize)> = LookupType::iter()
        .map(|lookup| (lookup, stats.get_lookup_count(lookup)))
        .filter(|(_, count)| *count > 0)
        .collect();
    if !lookups.is_empty() {
        info!("Successful Lookups:");
        for (lookup, count) in lookups {
            info!("   {}: {}", lookup.as_str(), count);
        }
    }

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for kind in LookupErrorKind::iter() {
            let count = stats.get_error_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }

    let delivery_failures = stats.delivery_failures();
    if delivery_failures > 0 {
        info!("Undelivered replies: {}", delivery_failures);
    }
}
