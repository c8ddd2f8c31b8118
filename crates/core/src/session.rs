//! Latest-wins handling for rapid resubmissions within one session.
//!
//! A submission takes a ticket before computing; only the most recently
//! issued ticket may publish its result. Results of superseded computations
//! are discarded on completion, so earlier in-flight passes can never
//! overwrite a newer answer.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Default)]
pub struct SessionGate {
    issued: AtomicU64,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new submission. Any earlier ticket becomes stale.
    pub fn begin(&self) -> SubmissionTicket {
        SubmissionTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        ticket.0 == self.issued.load(Ordering::SeqCst)
    }

    /// Publish a computed result. Returns `None` when a newer submission
    /// superseded this one; the caller drops the result.
    pub fn commit<T>(&self, ticket: SubmissionTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(ticket = ticket.0, "discarding result of superseded submission");
            None
        }
    }
}
