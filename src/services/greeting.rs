use crate::models::HelloWorldSettings;
use std::time::Duration;

/// Slow "say hello" operation behind the hello-world counter.
pub trait GreetingModel: Send + Sync {
    /// Blocks for the simulated latency and returns how much the counter grows.
    fn say_hello(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct SimulatedGreetingModel {
    delay: Duration,
    step: u64,
}

impl SimulatedGreetingModel {
    pub fn new(settings: &HelloWorldSettings) -> Self {
        Self {
            delay: Duration::from_millis(settings.delay_ms),
            step: settings.step,
        }
    }
}

impl Default for SimulatedGreetingModel {
    fn default() -> Self {
        Self::new(&HelloWorldSettings::default())
    }
}

impl GreetingModel for SimulatedGreetingModel {
    fn say_hello(&self) -> u64 {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.step
    }
}
