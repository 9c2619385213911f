// Booking state machine
//
// The presenter tracks one booking attempt at a time:
//
//   Idle -> Booking -> {Completed, Failed, Cancelled} -> Idle
//
// The worker thread never touches the phase; it only reads the cancellation flag
// and posts a BookingMessage back to the UI thread when it is done.

use crate::ui::view::DialogHandle;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag for one booking attempt.
///
/// Written by the UI thread, read by the worker before each step. A stale read
/// costs at most one extra step.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// How a booking attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Completed,
    /// Booking failed; carries the message to show the user
    Failed(String),
    /// Abandoned after the user cancelled; ends silently
    Cancelled,
}

impl BookingOutcome {
    /// Error text for the completion callback, `None` on success.
    pub fn error(&self) -> Option<&str> {
        match self {
            BookingOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingOutcome::Completed => write!(f, "completed"),
            BookingOutcome::Failed(message) => write!(f, "failed: {}", message),
            BookingOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Message posted from a booking worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMessage {
    pub attempt: u64,
    pub outcome: BookingOutcome,
}

/// Where the presenter is in the booking lifecycle.
#[derive(Debug, Clone, Default)]
pub enum BookingPhase {
    #[default]
    Idle,
    Booking {
        attempt: u64,
        dialog: DialogHandle,
        cancel: CancellationFlag,
    },
}

impl BookingPhase {
    pub fn is_booking(&self) -> bool {
        matches!(self, BookingPhase::Booking { .. })
    }

    /// Attempt id of the in-flight booking, if any.
    pub fn attempt(&self) -> Option<u64> {
        match self {
            BookingPhase::Booking { attempt, .. } => Some(*attempt),
            BookingPhase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_shared_between_clones() {
        let flag = CancellationFlag::new();
        let worker_view = flag.clone();

        assert!(!worker_view.is_cancelled());
        flag.cancel();
        assert!(worker_view.is_cancelled());
    }

    #[test]
    fn test_fresh_flags_are_independent() {
        let first = CancellationFlag::new();
        first.cancel();
        assert!(!CancellationFlag::new().is_cancelled());
    }

    #[test]
    fn test_outcome_error() {
        assert_eq!(BookingOutcome::Completed.error(), None);
        assert_eq!(BookingOutcome::Cancelled.error(), None);
        assert_eq!(
            BookingOutcome::Failed("network down".into()).error(),
            Some("network down")
        );
    }

    #[test]
    fn test_phase_attempt() {
        assert_eq!(BookingPhase::Idle.attempt(), None);
        let phase = BookingPhase::Booking {
            attempt: 3,
            dialog: DialogHandle::new(1),
            cancel: CancellationFlag::new(),
        };
        assert!(phase.is_booking());
        assert_eq!(phase.attempt(), Some(3));
    }
}
