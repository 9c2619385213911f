//! Data models for the demos.
//!
//! - [`FormData`]: flight booker form value with validation
//! - [`DateFormat`]: pluggable date-entry parsing strategy
//! - [`CounterState`]: hello-world counter value
//! - [`AppConfig`]: settings loaded from `Demos.yaml`
//!
//! # Architecture Note
//!
//! Everything here is a plain value. Presenters own their copy and replace it on
//! every UI event; nothing in this module is shared between threads.

pub mod config;
pub mod counter;
pub mod form_data;

pub use config::{AppConfig, FlightBookerSettings, HelloWorldSettings};
pub use counter::{CounterState, count_text};
pub use form_data::{DEFAULT_DATE_FORMAT, DateFormat, FormData};
