//! Per-endpoint sequence numbers.
//!
//! Requests to the same endpoint can resolve out of order. Every request
//! takes a ticket before it is sent; a response is applied only when its
//! ticket is newer than the last one applied for that endpoint.

use crate::filter::FilterState;
use crate::schedule::is_wanted;
use std::collections::HashMap;
use velib_api::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub endpoint: Endpoint,
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    issued: HashMap<Endpoint, u64>,
    applied: HashMap<Endpoint, u64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be sent.
    pub fn begin(&mut self, endpoint: Endpoint) -> Ticket {
        let seq = self.issued.entry(endpoint).or_insert(0);
        *seq += 1;
        Ticket {
            endpoint,
            seq: *seq,
        }
    }

    /// Record `ticket` as applied if it is the newest seen so far.
    ///
    /// Returns false for a stale response, which must be dropped.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        let applied = self.applied.entry(ticket.endpoint).or_insert(0);
        if ticket.seq > *applied {
            *applied = ticket.seq;
            true
        } else {
            false
        }
    }

    /// Make every in-flight request for `endpoint` stale.
    pub fn invalidate(&mut self, endpoint: Endpoint) {
        let ticket = self.begin(endpoint);
        self.accept(ticket);
    }

    /// Whether `endpoint` is still wanted under `flags`.
    ///
    /// When it is not, in-flight requests are made stale so a response
    /// arriving after the toggle went off is never applied.
    pub fn sync_toggle(&mut self, endpoint: Endpoint, flags: &FilterState) -> bool {
        let wanted = is_wanted(endpoint, flags);
        if !wanted {
            self.invalidate(endpoint);
        }
        wanted
    }

    pub fn last_applied(&self, endpoint: Endpoint) -> u64 {
        self.applied.get(&endpoint).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut seq = Sequencer::new();
        let a = seq.begin(Endpoint::Stations);
        assert!(seq.accept(a));
        let b = seq.begin(Endpoint::Stations);
        assert!(seq.accept(b));
        assert_eq!(seq.last_applied(Endpoint::Stations), 2);
    }

    #[test]
    fn test_stale_response_is_rejected() {
        let mut seq = Sequencer::new();
        let slow = seq.begin(Endpoint::Stations);
        let fast = seq.begin(Endpoint::Stations);
        assert!(seq.accept(fast));
        assert!(!seq.accept(slow));
        assert_eq!(seq.last_applied(Endpoint::Stations), fast.seq);
    }

    #[test]
    fn test_endpoints_are_independent() {
        let mut seq = Sequencer::new();
        let stations = seq.begin(Endpoint::Stations);
        let stats = seq.begin(Endpoint::Statistics);
        let newer_stations = seq.begin(Endpoint::Stations);
        assert!(seq.accept(newer_stations));
        assert!(seq.accept(stats));
        assert!(!seq.accept(stations));
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let mut seq = Sequencer::new();
        let in_flight = seq.begin(Endpoint::LiveTrips);
        seq.invalidate(Endpoint::LiveTrips);
        assert!(!seq.accept(in_flight));
        let next = seq.begin(Endpoint::LiveTrips);
        assert!(seq.accept(next));
    }

    #[test]
    fn test_toggle_off_drops_in_flight_malfunctions() {
        let mut seq = Sequencer::new();
        let mut flags = FilterState {
            show_malfunctioning: true,
            ..FilterState::default()
        };
        assert!(seq.sync_toggle(Endpoint::Malfunctioning, &flags));
        let in_flight = seq.begin(Endpoint::Malfunctioning);

        flags.show_malfunctioning = false;
        assert!(!seq.sync_toggle(Endpoint::Malfunctioning, &flags));
        assert!(!seq.accept(in_flight));
    }

    #[test]
    fn test_sync_toggle_leaves_timed_endpoints_alone() {
        let mut seq = Sequencer::new();
        let stations = seq.begin(Endpoint::Stations);
        assert!(seq.sync_toggle(Endpoint::Stations, &FilterState::default()));
        assert!(seq.accept(stations));
    }
}
