//! Bot statistics tracking.
//!
//! Thread-safe counters for handled events, lookup outcomes and reply
//! delivery failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{EventType, LookupErrorKind, LookupType};

/// Thread-safe bot statistics tracker.
///
/// Uses atomic counters so handler tasks can record outcomes concurrently.
/// Every enum variant is initialized to zero on creation.
///
/// # Categories
///
/// - **Events**: Inbound commands and inline queries by kind
/// - **Lookups**: Successful forward and reverse lookups
/// - **Errors**: Lookup failures by kind
/// - **Delivery failures**: Replies the transport refused or lost
pub struct BotStats {
    events: HashMap<EventType, AtomicUsize>,
    lookups: HashMap<LookupType, AtomicUsize>,
    errors: HashMap<LookupErrorKind, AtomicUsize>,
    delivery_failures: AtomicUsize,
}

impl BotStats {
    pub fn new() -> Self {
        let mut events = HashMap::new();
        for event in EventType::iter() {
            events.insert(event, AtomicUsize::new(0));
        }

        let mut lookups = HashMap::new();
        for lookup in LookupType::iter() {
            lookups.insert(lookup, AtomicUsize::new(0));
        }

        let mut errors = HashMap::new();
        for kind in LookupErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        BotStats {
            events,
            lookups,
            errors,
            delivery_failures: AtomicUsize::new(0),
        }
    }

    pub fn increment_event(&self, event: EventType) {
        if let Some(counter) = self.events.get(&event) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment event counter for {:?} which is not in the map. \
                 This indicates a bug in BotStats initialization.",
                event
            );
        }
    }

    pub fn increment_lookup(&self, lookup: LookupType) {
        if let Some(counter) = self.lookups.get(&lookup) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment lookup counter for {:?} which is not in the map. \
                 This indicates a bug in BotStats initialization.",
                lookup
            );
        }
    }

    pub fn increment_error(&self, kind: LookupErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in BotStats initialization.",
                kind
            );
        }
    }

    pub fn increment_delivery_failure(&self) {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_event_count(&self, event: EventType) -> usize {
        self.events
            .get(&event)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_lookup_count(&self, lookup: LookupType) -> usize {
        self.lookups
            .get(&lookup)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_error_count(&self, kind: LookupErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn delivery_failures(&self) -> usize {
        self.delivery_failures.load(Ordering::SeqCst)
    }

    pub fn total_events(&self) -> usize {
        self.events.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for BotStats {
    fn default() -> Self {
        Self::new()
    }
}
