// Flight booker presenter
//
// Runs on the UI thread. Owns the form data, the booking phase and the inbox of
// messages coming back from booking workers. Workers run on tokio's blocking pool
// and only ever touch the cancellation flag and the UI bridge.

use crate::metrics::Metrics;
use crate::models::{DateFormat, FormData};
use crate::services::booking::{BookingError, BookingModel, BookingSteps};
use crate::state::{BookingMessage, BookingOutcome, BookingPhase, CancellationFlag};
use crate::ui::bridge::{UiBridge, UiInbox, WakeFn, ui_channel};
use crate::ui::view::FlightBookerView;
use std::sync::Arc;
use std::time::Instant;

/// Text of the notification shown after a successful booking.
pub const BOOKING_SUCCESS_TEXT: &str = "Booking successful";

/// Consume a booking sequence until it ends or `cancel` is set.
///
/// The flag is checked before every step. The sequence is always dropped before
/// this returns, so callers may report the outcome knowing no more steps run.
pub fn drive_booking(mut steps: BookingSteps, cancel: &CancellationFlag) -> BookingOutcome {
    loop {
        if cancel.is_cancelled() {
            // The booking server is not told about the abandoned reservation.
            drop(steps);
            return BookingOutcome::Cancelled;
        }

        match steps.next() {
            Some(Ok(step)) => tracing::debug!("Booking step {}", step),
            Some(Err(BookingError::Io(message))) => {
                tracing::warn!("Booking failed: {}", message);
                return BookingOutcome::Failed(message);
            }
            None => return BookingOutcome::Completed,
        }
    }
}

/// Presenter of the flight booker window.
///
/// # Threading
///
/// Every public method must be called on the UI thread. Booking results arrive
/// through the presenter's inbox and are applied by
/// [`process_ui_messages`](Self::process_ui_messages), which the front-end calls
/// whenever the wake hook fires.
pub struct FlightBookerPresenter<V: FlightBookerView> {
    model: Arc<dyn BookingModel>,
    view: V,
    data: FormData,
    date_format: DateFormat,
    phase: BookingPhase,
    next_attempt: u64,
    runtime: tokio::runtime::Handle,
    bridge: UiBridge<BookingMessage>,
    inbox: UiInbox<BookingMessage>,
    metrics: Arc<Metrics>,
}

impl<V: FlightBookerView> FlightBookerPresenter<V> {
    /// Create a presenter.
    ///
    /// # Arguments
    /// * `model` - Booking service; also provides the initial form data
    /// * `view` - Window the presenter drives
    /// * `date_format` - How date entries are parsed
    /// * `runtime` - Runtime whose blocking pool runs booking workers
    /// * `wake` - Hook that makes the UI thread call `process_ui_messages`
    pub fn new(
        model: Arc<dyn BookingModel>,
        view: V,
        date_format: DateFormat,
        runtime: tokio::runtime::Handle,
        wake: WakeFn,
    ) -> Self {
        let (bridge, inbox) = ui_channel(wake);
        let data = model.build_data();

        Self {
            model,
            view,
            data,
            date_format,
            phase: BookingPhase::Idle,
            next_attempt: 0,
            runtime,
            bridge,
            inbox,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Share a metrics instance with the rest of the application.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn data(&self) -> FormData {
        self.data
    }

    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// The window is built; push the initial state into it.
    pub fn on_built(&mut self) {
        tracing::debug!("Flight booker view built, initial data: {:?}", self.data);
        self.update_view();
    }

    pub fn on_flight_type_changed(&mut self, one_way: bool) {
        tracing::debug!("Flight type changed: one_way={}", one_way);
        self.data = self.data.update_one_way(one_way);
        self.update_view();
    }

    pub fn on_start_date_changed(&mut self, text: &str) {
        let date = self.date_format.parse(text);
        tracing::trace!("Start date '{}' parsed as {:?}", text, date);
        self.data = self.data.update_start_date(date);
        self.update_view();
    }

    pub fn on_return_date_changed(&mut self, text: &str) {
        let date = self.date_format.parse(text);
        tracing::trace!("Return date '{}' parsed as {:?}", text, date);
        self.data = self.data.update_return_date(date);
        self.update_view();
    }

    /// Start a booking on a worker thread and show the busy dialog.
    ///
    /// Ignored while another booking is in flight or when the form is invalid.
    pub fn on_book_clicked(&mut self) {
        if let Some(attempt) = self.phase.attempt() {
            tracing::warn!("Book clicked while booking #{} is in progress - ignoring", attempt);
            self.metrics.record_book_click_ignored();
            return;
        }
        if !self.data.is_valid() {
            tracing::warn!("Book clicked with invalid form data - ignoring");
            self.metrics.record_book_click_ignored();
            return;
        }

        let dialog = self.view.show_book_dialog();
        let cancel = CancellationFlag::new();
        self.next_attempt += 1;
        let attempt = self.next_attempt;

        self.phase = BookingPhase::Booking {
            attempt,
            dialog,
            cancel: cancel.clone(),
        };
        self.metrics.record_booking_started();
        tracing::info!("Booking #{} started", attempt);
        self.update_view();

        let model = Arc::clone(&self.model);
        let metrics = Arc::clone(&self.metrics);
        let bridge = self.bridge.clone();
        let data = self.data;

        self.runtime.spawn_blocking(move || {
            let started = Instant::now();
            let outcome = drive_booking(model.do_book(&data), &cancel);
            metrics.record_booking_time(started.elapsed());
            tracing::info!("Booking #{} worker finished: {}", attempt, outcome);

            if let Err(e) = bridge.post(BookingMessage { attempt, outcome }) {
                tracing::warn!("Could not report booking #{} to the UI: {}", attempt, e);
            }
        });
    }

    /// The user dismissed the busy dialog.
    ///
    /// Only raises the flag; the worker notices before its next step.
    pub fn on_book_cancelled(&mut self) {
        match &self.phase {
            BookingPhase::Booking {
                attempt, cancel, ..
            } => {
                tracing::info!("Cancellation requested for booking #{}", attempt);
                cancel.cancel();
            }
            BookingPhase::Idle => tracing::debug!("Cancel requested with no booking in flight"),
        }
    }

    /// Apply every queued worker message. Returns how many were applied.
    pub fn process_ui_messages(&mut self) -> usize {
        let messages = self.inbox.drain();
        let count = messages.len();
        for message in messages {
            self.on_booking_finished(message);
        }
        count
    }

    /// Block until the in-flight booking reports back and apply its result.
    ///
    /// Returns `false` at once when no booking is in flight. For headless
    /// front-ends and tests; a GUI uses
    /// [`process_ui_messages`](Self::process_ui_messages) from its event loop.
    pub fn wait_for_ui_message(&mut self) -> bool {
        if !self.phase.is_booking() {
            return false;
        }
        // The presenter holds a bridge, so the inbox never closes here
        match self.inbox.wait_next() {
            Some(message) => {
                self.on_booking_finished(message);
                true
            }
            None => false,
        }
    }

    fn on_booking_finished(&mut self, message: BookingMessage) {
        self.metrics.record_ui_message();

        let dialog = match &self.phase {
            BookingPhase::Booking {
                attempt, dialog, ..
            } if *attempt == message.attempt => *dialog,
            _ => {
                tracing::warn!(
                    "Ignoring stale result of booking #{}: {}",
                    message.attempt,
                    message.outcome
                );
                return;
            }
        };
        self.phase = BookingPhase::Idle;

        match message.outcome {
            BookingOutcome::Completed => {
                self.metrics.record_booking_completed();
                self.view.destroy_dialog(dialog);
                self.view.show_info(BOOKING_SUCCESS_TEXT);
            }
            BookingOutcome::Failed(error) => {
                self.metrics.record_booking_failed();
                self.view.destroy_dialog(dialog);
                self.view.show_error(&error);
            }
            BookingOutcome::Cancelled => {
                self.metrics.record_booking_cancelled();
                tracing::info!("Booking #{} cancelled", message.attempt);
            }
        }
        self.update_view();
    }

    /// Book stays disabled for the whole attempt, including after a cancel
    /// request until the worker reports back.
    fn update_view(&self) {
        let book_enabled = self.data.is_valid() && !self.phase.is_booking();
        self.view.update(!self.data.one_way, book_enabled);
    }
}
