// Hello-world presenter
//
// Each click runs the slow greeting on a worker and returns to the event loop at
// once. The counter itself lives on the UI thread; workers only post how much it
// should grow.

use crate::metrics::Metrics;
use crate::models::{CounterState, count_text};
use crate::services::greeting::GreetingModel;
use crate::ui::bridge::{UiBridge, UiInbox, WakeFn, ui_channel};
use crate::ui::view::HelloWorldView;
use std::sync::Arc;

/// Message posted from a greeting worker to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMessage {
    Incremented(u64),
}

pub struct HelloWorldPresenter<V: HelloWorldView> {
    model: Arc<dyn GreetingModel>,
    view: V,
    state: CounterState,
    in_flight: usize,
    runtime: tokio::runtime::Handle,
    bridge: UiBridge<CounterMessage>,
    inbox: UiInbox<CounterMessage>,
    metrics: Arc<Metrics>,
}

impl<V: HelloWorldView> HelloWorldPresenter<V> {
    pub fn new(
        model: Arc<dyn GreetingModel>,
        view: V,
        runtime: tokio::runtime::Handle,
        wake: WakeFn,
    ) -> Self {
        let (bridge, inbox) = ui_channel(wake);
        Self {
            model,
            view,
            state: CounterState::default(),
            in_flight: 0,
            runtime,
            bridge,
            inbox,
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    /// Greetings started but not yet applied to the counter.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn on_activate(&mut self) {
        self.update_count();
    }

    pub fn on_say_hello_clicked(&mut self) {
        self.in_flight += 1;
        tracing::debug!("Say hello clicked, {} greeting(s) in flight", self.in_flight);

        let model = Arc::clone(&self.model);
        let bridge = self.bridge.clone();
        self.runtime.spawn_blocking(move || {
            let step = model.say_hello();
            if let Err(e) = bridge.post(CounterMessage::Incremented(step)) {
                tracing::warn!("Could not report greeting to the UI: {}", e);
            }
        });
    }

    /// Apply every queued worker message. Returns how many were applied.
    pub fn process_ui_messages(&mut self) -> usize {
        let messages = self.inbox.drain();
        let count = messages.len();
        for message in messages {
            self.apply(message);
        }
        count
    }

    /// Block until the next greeting reports back and apply it.
    ///
    /// Returns `false` at once when no greeting is in flight.
    pub fn wait_for_ui_message(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.inbox.wait_next() {
            Some(message) => {
                self.apply(message);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, message: CounterMessage) {
        self.metrics.record_ui_message();
        match message {
            CounterMessage::Incremented(step) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.state = self.state.incremented(step);
                self.metrics.record_greeting();
                tracing::info!("Said hello, count is now {}", self.state.count);
                self.update_count();
            }
        }
    }

    fn update_count(&self) {
        self.view.update_count_label(&count_text(self.state.count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::MockHelloWorldView;
    use mockall::predicate::eq;

    struct InstantGreeting;

    impl GreetingModel for InstantGreeting {
        fn say_hello(&self) -> u64 {
            1
        }
    }

    #[test]
    fn test_on_activate_shows_zero() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut view = MockHelloWorldView::new();
        view.expect_update_count_label()
            .with(eq("I've said hello 0 times"))
            .times(1)
            .return_const(());

        let mut presenter = HelloWorldPresenter::new(
            Arc::new(InstantGreeting),
            view,
            runtime.handle().clone(),
            Arc::new(|| {}),
        );
        presenter.on_activate();
    }

    #[test]
    fn test_click_updates_label_on_ui_thread() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ui_thread = std::thread::current().id();
        let mut view = MockHelloWorldView::new();
        view.expect_update_count_label()
            .with(eq("I've said hello 1 time"))
            .times(1)
            .returning(move |_| assert_eq!(std::thread::current().id(), ui_thread));

        let mut presenter = HelloWorldPresenter::new(
            Arc::new(InstantGreeting),
            view,
            runtime.handle().clone(),
            Arc::new(|| {}),
        );
        presenter.on_say_hello_clicked();
        assert_eq!(presenter.in_flight(), 1);

        assert!(presenter.wait_for_ui_message());
        assert_eq!(presenter.count(), 1);
        assert_eq!(presenter.in_flight(), 0);
    }

    #[test]
    fn test_wait_with_no_greeting_in_flight_returns_at_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut view = MockHelloWorldView::new();
        view.expect_update_count_label().times(0);

        let mut presenter = HelloWorldPresenter::new(
            Arc::new(InstantGreeting),
            view,
            runtime.handle().clone(),
            Arc::new(|| {}),
        );

        assert!(!presenter.wait_for_ui_message());
        assert_eq!(presenter.count(), 0);
    }
}
