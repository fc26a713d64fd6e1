//! Pending-request count behind the page-wide loading overlay.
//!
//! Each user-initiated request holds a [`LoadingGuard`] while in flight. The
//! overlay stays visible while any guard is alive, so overlapping requests
//! keep it up until the last one finishes, and a request dropped mid-flight
//! still releases its slot.

/// Storage for the number of requests in flight.
pub trait PendingCounter {
    fn update(&mut self, f: impl FnOnce(u32) -> u32);
}

/// Whether the overlay should show for `pending` requests.
pub fn is_loading(pending: u32) -> bool {
    pending > 0
}

/// Counts one request for as long as it lives.
pub struct LoadingGuard<C: PendingCounter> {
    counter: C,
}

impl<C: PendingCounter> LoadingGuard<C> {
    pub fn begin(mut counter: C) -> Self {
        counter.update(|n| n.saturating_add(1));
        Self { counter }
    }
}

impl<C: PendingCounter> Drop for LoadingGuard<C> {
    fn drop(&mut self) {
        self.counter.update(|n| n.saturating_sub(1));
    }
}
