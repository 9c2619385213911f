use serde::{Deserialize, Serialize};

use crate::models::form_data::DEFAULT_DATE_FORMAT;

/// Demo configuration from `Demos.yaml`
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub flight_booker: FlightBookerSettings,

    #[serde(default)]
    pub hello_world: HelloWorldSettings,

    #[serde(default)]
    pub debug_mode: bool,
}

/// Settings for the flight booker form and its simulated booking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightBookerSettings {
    /// chrono pattern used by the date entries
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_booking_steps")]
    pub booking_steps: usize,

    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// 1-based step at which the simulated booking fails, if any
    #[serde(default)]
    pub fail_at_step: Option<usize>,

    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for FlightBookerSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            booking_steps: default_booking_steps(),
            step_delay_ms: default_step_delay_ms(),
            fail_at_step: None,
            failure_message: default_failure_message(),
        }
    }
}

/// Settings for the hello-world counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloWorldSettings {
    #[serde(default = "default_hello_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_hello_step")]
    pub step: u64,
}

impl Default for HelloWorldSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_hello_delay_ms(),
            step: default_hello_step(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_booking_steps() -> usize {
    5
}

fn default_step_delay_ms() -> u64 {
    1000
}

fn default_failure_message() -> String {
    "Booking server unreachable".to_string()
}

fn default_hello_delay_ms() -> u64 {
    3000
}

fn default_hello_step() -> u64 {
    1
}
