use crate::models::{FlightBookerSettings, FormData};
use chrono::Local;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// One unit of progress reported by a booking operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStep {
    /// 1-based position of the step
    pub index: usize,
    pub total: usize,
    pub description: String,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.index, self.total, self.description)
    }
}

/// Errors that can occur while a booking is in progress
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Simulated (or real) I/O failure talking to the booking server.
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Io(String),
}

/// Lazy, finite booking progress sequence.
///
/// Exhausting it means the booking succeeded. Dropping it early abandons the
/// booking; implementations release whatever they hold in `Drop`.
pub type BookingSteps = Box<dyn Iterator<Item = Result<BookingStep, BookingError>> + Send>;

/// Model collaborator of the flight booker presenter.
pub trait BookingModel: Send + Sync {
    /// Initial form contents.
    fn build_data(&self) -> FormData;

    /// Start a booking for `data`. Nothing happens until the sequence is polled.
    fn do_book(&self, data: &FormData) -> BookingSteps;
}

const STEP_DESCRIPTIONS: &[&str] = &[
    "Contacting booking server",
    "Checking seat availability",
    "Reserving seats",
    "Processing payment",
    "Confirming booking",
];

/// Booking model that emulates server latency with sleeps.
#[derive(Debug, Clone)]
pub struct SimulatedBookingModel {
    settings: FlightBookerSettings,
}

impl SimulatedBookingModel {
    pub fn new(settings: FlightBookerSettings) -> Self {
        Self { settings }
    }
}

impl Default for SimulatedBookingModel {
    fn default() -> Self {
        Self::new(FlightBookerSettings::default())
    }
}

impl BookingModel for SimulatedBookingModel {
    fn build_data(&self) -> FormData {
        let today = Local::now().date_naive();
        FormData::new(true, Some(today), Some(today))
    }

    fn do_book(&self, data: &FormData) -> BookingSteps {
        tracing::info!(
            "Booking {} flight: start={:?}, return={:?}",
            if data.one_way { "one-way" } else { "return" },
            data.start_date,
            data.return_date
        );

        Box::new(SimulatedBooking {
            next: 1,
            total: self.settings.booking_steps,
            delay: Duration::from_millis(self.settings.step_delay_ms),
            fail_at: self.settings.fail_at_step,
            failure_message: self.settings.failure_message.clone(),
            finished: false,
        })
    }
}

/// Step sequence produced by [`SimulatedBookingModel`].
#[derive(Debug)]
pub struct SimulatedBooking {
    next: usize,
    total: usize,
    delay: Duration,
    fail_at: Option<usize>,
    failure_message: String,
    finished: bool,
}

impl Iterator for SimulatedBooking {
    type Item = Result<BookingStep, BookingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.next > self.total {
            self.finished = true;
            return None;
        }

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let index = self.next;
        self.next += 1;

        if self.fail_at == Some(index) {
            self.finished = true;
            return Some(Err(BookingError::Io(self.failure_message.clone())));
        }

        let description = STEP_DESCRIPTIONS[(index - 1) % STEP_DESCRIPTIONS.len()].to_string();
        Some(Ok(BookingStep {
            index,
            total: self.total,
            description,
        }))
    }
}

impl Drop for SimulatedBooking {
    fn drop(&mut self) {
        if self.finished {
            tracing::debug!("Booking sequence finished after {} steps", self.next - 1);
        } else {
            // TODO: tell the booking server the reservation was abandoned
            tracing::info!(
                "Booking sequence released at step {} of {}",
                self.next - 1,
                self.total
            );
        }
    }
}
