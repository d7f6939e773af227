//! Traffic Poller
//!
//! Fetches the traffic feed immediately and then on a fixed cadence. Every
//! tick takes a ticket; a response is applied only while the poller is alive
//! and only if its ticket is newer than the last one applied.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use super::global::DashboardState;
use super::traffic::{FeedTransition, TrafficRecord, TrafficSnapshot};
use crate::api::{fetch_traffic, FetchError};

/// Time between polls
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Issue order of one poll request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

#[derive(Debug)]
struct GuardState {
    alive: Cell<bool>,
    issued: Cell<u64>,
    applied: Cell<u64>,
}

/// Liveness flag and ticket counters shared by the timer and in-flight fetches
#[derive(Clone, Debug)]
pub struct PollGuard {
    state: Rc<GuardState>,
}

impl Default for PollGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PollGuard {
    pub fn new() -> Self {
        Self {
            state: Rc::new(GuardState {
                alive: Cell::new(true),
                issued: Cell::new(0),
                applied: Cell::new(0),
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive.get()
    }

    /// Next ticket, or `None` once torn down
    pub fn issue(&self) -> Option<PollTicket> {
        if !self.is_alive() {
            return None;
        }
        let next = self.state.issued.get() + 1;
        self.state.issued.set(next);
        Some(PollTicket(next))
    }

    /// Whether a response carrying `ticket` may still be applied
    pub fn accepts(&self, ticket: PollTicket) -> bool {
        self.is_alive() && ticket.0 > self.state.applied.get()
    }

    /// No newer request has been issued since `ticket`
    pub fn is_latest(&self, ticket: PollTicket) -> bool {
        ticket.0 == self.state.issued.get()
    }

    /// Run `apply` if the ticket is accepted. Returns whether it ran.
    pub fn deliver(&self, ticket: PollTicket, apply: impl FnOnce()) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state.applied.set(ticket.0);
        apply();
        true
    }

    /// Stop accepting responses; pending fetches resolve into nothing
    pub fn teardown(&self) {
        self.state.alive.set(false);
    }
}

/// Running poller; dropping or stopping it cancels the timer
pub struct PollerHandle {
    guard: PollGuard,
    interval: Option<Interval>,
}

impl PollerHandle {
    pub fn stop(&mut self) {
        self.guard.teardown();
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Poll now, then every [`POLL_INTERVAL_MS`]
pub fn start_polling(state: DashboardState) -> PollerHandle {
    let guard = PollGuard::new();
    run_tick(state, guard.clone());

    let tick_guard = guard.clone();
    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        run_tick(state, tick_guard.clone());
    });

    PollerHandle {
        guard,
        interval: Some(interval),
    }
}

fn run_tick(state: DashboardState, guard: PollGuard) {
    let Some(ticket) = guard.issue() else {
        return;
    };
    state.traffic.update(|snapshot| snapshot.begin_fetch());

    spawn_local(async move {
        let outcome = fetch_traffic().await;

        if let Err(e) = &outcome {
            web_sys::console::error_1(&format!("Error fetching traffic data: {}", e).into());
        }

        let now = chrono::Utc::now().timestamp_millis();
        let mut transition = FeedTransition::Unchanged;
        let latest = guard.is_latest(ticket);
        let applied = guard.deliver(ticket, || {
            state
                .traffic
                .update(|snapshot| transition = settle(snapshot, outcome, now, latest));
        });

        if !applied {
            web_sys::console::debug_1(&format!("Dropped stale poll response {:?}", ticket).into());
            return;
        }

        match transition {
            FeedTransition::Lost => state.show_error("Lost connection to traffic feed"),
            FeedTransition::Restored => state.show_success("Traffic feed restored"),
            FeedTransition::Unchanged => {}
        }
    });
}

/// Apply one accepted response. `loading` stays set while a newer request
/// is still in flight.
fn settle(
    snapshot: &mut TrafficSnapshot,
    outcome: Result<Vec<TrafficRecord>, FetchError>,
    now_ms: i64,
    latest: bool,
) -> FeedTransition {
    let transition = snapshot.apply(outcome, now_ms);
    if !latest {
        snapshot.loading = true;
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::traffic::record;
    use std::cell::RefCell;

    #[test]
    fn test_tickets_increase() {
        let guard = PollGuard::new();
        let a = guard.issue().unwrap();
        let b = guard.issue().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_no_mutation_after_teardown() {
        let guard = PollGuard::new();
        let applied = RefCell::new(Vec::new());
        let ticket = guard.issue().unwrap();

        guard.teardown();
        let ran = guard.deliver(ticket, || applied.borrow_mut().push(ticket));

        assert!(!ran);
        assert!(applied.borrow().is_empty());
        assert!(guard.issue().is_none());
    }

    #[test]
    fn test_stale_response_dropped() {
        let guard = PollGuard::new();
        let applied = RefCell::new(Vec::new());
        let first = guard.issue().unwrap();
        let second = guard.issue().unwrap();

        // second resolves before first
        assert!(guard.deliver(second, || applied.borrow_mut().push(second)));
        assert!(!guard.deliver(first, || applied.borrow_mut().push(first)));

        assert_eq!(*applied.borrow(), vec![second]);
    }

    #[test]
    fn test_in_order_responses_all_apply() {
        let guard = PollGuard::new();
        let applied = RefCell::new(Vec::new());
        let first = guard.issue().unwrap();
        let second = guard.issue().unwrap();

        assert!(guard.deliver(first, || applied.borrow_mut().push(first)));
        assert!(guard.deliver(second, || applied.borrow_mut().push(second)));
        assert_eq!(*applied.borrow(), vec![first, second]);
    }

    #[test]
    fn test_ticket_applies_once() {
        let guard = PollGuard::new();
        let ticket = guard.issue().unwrap();
        assert!(guard.deliver(ticket, || {}));
        assert!(!guard.accepts(ticket));
    }

    #[test]
    fn test_clones_share_liveness() {
        let guard = PollGuard::new();
        let timer_side = guard.clone();
        guard.teardown();
        assert!(!timer_side.is_alive());
    }

    #[test]
    fn test_older_response_keeps_loading_while_newer_in_flight() {
        let guard = PollGuard::new();
        let mut snapshot = TrafficSnapshot::new();

        let first = guard.issue().unwrap();
        snapshot.begin_fetch();
        let second = guard.issue().unwrap();
        snapshot.begin_fetch();

        let latest = guard.is_latest(first);
        assert!(guard.deliver(first, || {
            settle(&mut snapshot, Ok(vec![record("sensor_A", "sensor_B", 40.0, 0.0)]), 1_000, latest);
        }));
        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.loading);

        let latest = guard.is_latest(second);
        assert!(guard.deliver(second, || {
            settle(&mut snapshot, Ok(vec![]), 2_000, latest);
        }));
        assert!(snapshot.records.is_empty());
        assert!(!snapshot.loading);
    }

    #[test]
    fn test_latest_failure_clears_loading() {
        let guard = PollGuard::new();
        let mut snapshot = TrafficSnapshot::new();
        let ticket = guard.issue().unwrap();

        let latest = guard.is_latest(ticket);
        guard.deliver(ticket, || {
            settle(&mut snapshot, Err(FetchError::Status(502)), 0, latest);
        });

        assert!(!snapshot.loading);
        assert!(snapshot.error.is_some());
    }
}
