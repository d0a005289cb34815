// Deferred completions with explicit cancellation.
//
// The client simulates login, OTP verification and report submission as
// fixed-delay completions. A screen that tears down cancels its pending
// action, so a stale completion can never reach a dropped store.

use tracing::debug;

/// Result of polling a deferred action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    /// Deadline not reached yet
    Pending,
    /// Deadline reached; the payload is handed over exactly once
    Ready(T),
    /// Payload was already handed over by an earlier poll
    Taken,
    /// Cancelled before completion; the payload was dropped
    Cancelled,
}

/// A single fixed-delay action. Single-threaded and cooperative: nothing
/// fires on its own, the owner polls with its own clock.
#[derive(Debug)]
pub struct Deferred<T> {
    payload: Option<T>,
    deadline: i64,
    cancelled: bool,
}

impl<T> Deferred<T> {
    /// Schedule `payload` to become ready `delay_ms` after `now`
    pub fn new(payload: T, delay_ms: i64, now: i64) -> Self {
        Self {
            payload: Some(payload),
            deadline: now + delay_ms,
            cancelled: false,
        }
    }

    /// Epoch-ms instant at which the action completes
    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Drop the payload; all future polls report `Cancelled`.
    /// Cancelling after the payload was taken has no effect.
    pub fn cancel(&mut self) {
        if self.payload.take().is_some() {
            debug!(deadline = self.deadline, "cancelled pending action");
        }
        self.cancelled = true;
    }

    /// Check for completion against the caller's clock
    pub fn poll(&mut self, now: i64) -> Poll<T> {
        if self.cancelled {
            return Poll::Cancelled;
        }
        if now < self.deadline {
            return Poll::Pending;
        }
        match self.payload.take() {
            Some(payload) => Poll::Ready(payload),
            None => Poll::Taken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_deadline_exactly_once() {
        let mut task = Deferred::new("submitted", 1500, 1000);
        assert_eq!(task.deadline(), 2500);

        assert_eq!(task.poll(1000), Poll::Pending);
        assert_eq!(task.poll(2499), Poll::Pending);
        assert_eq!(task.poll(2500), Poll::Ready("submitted"));
        assert_eq!(task.poll(3000), Poll::Taken);
    }

    #[test]
    fn test_cancel_before_deadline_never_completes() {
        let mut task = Deferred::new(42, 1000, 0);
        task.cancel();
        assert!(task.is_cancelled());
        assert_eq!(task.poll(500), Poll::Cancelled);
        assert_eq!(task.poll(5000), Poll::Cancelled);
    }

    #[test]
    fn test_cancel_after_taken_keeps_taken_payload() {
        let mut task = Deferred::new(7, 10, 0);
        assert_eq!(task.poll(10), Poll::Ready(7));
        task.cancel();
        assert_eq!(task.poll(20), Poll::Cancelled);
    }
}
