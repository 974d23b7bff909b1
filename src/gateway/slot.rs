//! Latest-request tokens
//!
//! Each panel owns one [`RequestSlot`]. Submitting issues a [`Ticket`]; after
//! the gateway call resolves, the result is applied only if the ticket is
//! still the latest one issued. Responses from superseded submissions are
//! discarded, so the view always reflects the most recently submitted
//! request rather than whichever call happened to resolve last.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic token source for one panel.
#[derive(Debug, Default)]
pub struct RequestSlot {
    latest: AtomicU64,
}

/// Token for one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
}

impl RequestSlot {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issues a new ticket, superseding all previously issued ones.
    pub fn issue(&self) -> Ticket {
        Ticket {
            seq: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Whether this ticket is still the latest issued.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }
}
