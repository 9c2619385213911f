//! Services module - the demos' "back end".
//!
//! Both services are simulations: they sleep to emulate latency so the UI has
//! something slow to hand off to a worker thread. They have no dependency on the
//! UI layer and run entirely on worker threads.
//!
//! # Components
//!
//! - [`BookingModel`]: builds the initial [`FormData`](crate::models::FormData) and
//!   starts a booking, returning a lazy [`BookingSteps`] sequence.
//!   [`SimulatedBookingModel`] sleeps before each step and can be configured to
//!   fail with [`BookingError::Io`] at a given step.
//! - [`GreetingModel`]: the hello-world counter's slow operation.
//!
//! # Cancellation
//!
//! A booking is cancelled by dropping its step sequence before it is exhausted.
//! The sequence never checks any flag itself; the caller decides between steps.

pub mod booking;
pub mod greeting;

pub use booking::{
    BookingError, BookingModel, BookingStep, BookingSteps, SimulatedBooking, SimulatedBookingModel,
};
pub use greeting::{GreetingModel, SimulatedGreetingModel};
