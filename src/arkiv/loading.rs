//! # Loading Gate
//!
//! The presentation layer inserts an artificial pause between a state
//! change and the moment results render. That pause must be cancellable:
//! if another transition lands before it elapses, the stale "loading
//! complete" must not flip the newer state's results into view.
//!
//! The gate models this with a version counter instead of a scheduler.
//! Every transition begins a new ticket; finishing with a stale ticket is
//! a no-op. The timer itself (sleep, timeout, event loop) stays with the
//! caller, which keeps the engine synchronous and the behavior testable.

/// Versioned visibility gate for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    version: u64,
    loading: bool,
}

/// Handle for one scheduled visibility flip. Valid until the next
/// [`LoadingGate::begin`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a loading pause, invalidating any
    /// outstanding ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.version += 1;
        self.loading = true;
        LoadTicket(self.version)
    }

    /// Completes the pause if `ticket` is still current. Returns whether
    /// the flip took effect.
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 == self.version {
            self.loading = false;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
