use std::time::{Duration, Instant};

/// Identifies one scheduled action. A token from a cancelled or
/// rescheduled action never fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CancelToken(u64);

/// A single cancellable delayed action, polled by the owner.
///
/// Scheduling again replaces the pending action; `cancel` drops it.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<(CancelToken, Instant)>,
    next_token: u64,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_token: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant) -> CancelToken {
        self.next_token += 1;
        let token = CancelToken(self.next_token);
        self.pending = Some((token, now + self.delay));
        token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, token: CancelToken) -> bool {
        matches!(self.pending, Some((t, _)) if t == token)
    }

    /// Time left until the pending action fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Fire the pending action if its deadline has passed.
    /// Returns the token of the action that fired.
    pub fn poll(&mut self, now: Instant) -> Option<CancelToken> {
        match self.pending {
            Some((token, deadline)) if now >= deadline => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}
