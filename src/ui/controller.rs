// GUI Controllers - Bridge the Slint windows with the presenters
//
// Each controller:
// - Creates its Slint window and a view adapter that implements the view trait
// - Builds the presenter with a wake hook pointing at the window's event loop
// - Wires Slint callbacks to presenter handlers (set_handler)
// - Pushes the initial state once the window exists (on_activate)
//
// Presenters live in Rc<RefCell<..>> because they are only ever used on the
// Slint event loop thread. Views hold weak window handles so the callbacks owning
// the presenter do not keep the window alive.

use crate::metrics::Metrics;
use crate::models::{AppConfig, DateFormat};
use crate::services::{SimulatedBookingModel, SimulatedGreetingModel};
use crate::ui::bridge::WakeFn;
use crate::ui::hello::HelloWorldPresenter;
use crate::ui::presenter::FlightBookerPresenter;
use crate::ui::view::{DialogHandle, FlightBookerView, HelloWorldView};
use anyhow::{Context, Result};
use slint::ComponentHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

// Include the generated Slint code
slint::include_modules!();

/// [`FlightBookerView`] backed by the Slint `FlightBookerWindow`.
pub struct SlintFlightBookerView {
    ui: slint::Weak<FlightBookerWindow>,
    next_dialog: Cell<u64>,
    open_dialog: Cell<Option<DialogHandle>>,
}

impl SlintFlightBookerView {
    pub fn new(ui: &FlightBookerWindow) -> Self {
        Self {
            ui: ui.as_weak(),
            next_dialog: Cell::new(0),
            open_dialog: Cell::new(None),
        }
    }

    /// The user closed the busy dialog themselves.
    fn dialog_dismissed(&self) {
        self.open_dialog.set(None);
        if let Some(ui) = self.ui.upgrade() {
            ui.set_show_book_dialog(false);
        }
    }

    fn show_message(&self, title: &str, text: &str, is_error: bool) {
        if let Some(ui) = self.ui.upgrade() {
            ui.set_message_title(title.into());
            ui.set_message_text(text.into());
            ui.set_message_is_error(is_error);
            ui.set_show_message_dialog(true);
        }
    }
}

impl FlightBookerView for SlintFlightBookerView {
    fn show_book_dialog(&self) -> DialogHandle {
        let dialog = DialogHandle::new(self.next_dialog.get() + 1);
        self.next_dialog.set(dialog.id());
        self.open_dialog.set(Some(dialog));

        if let Some(ui) = self.ui.upgrade() {
            ui.set_show_book_dialog(true);
        }
        dialog
    }

    fn destroy_dialog(&self, dialog: DialogHandle) {
        if self.open_dialog.get() != Some(dialog) {
            tracing::debug!("Dialog {} already closed", dialog.id());
            return;
        }
        self.dialog_dismissed();
    }

    fn show_info(&self, text: &str) {
        self.show_message("Information", text, false);
    }

    fn show_error(&self, text: &str) {
        self.show_message("Error", text, true);
    }

    fn update(&self, return_date_enabled: bool, book_enabled: bool) {
        if let Some(ui) = self.ui.upgrade() {
            ui.set_return_date_enabled(return_date_enabled);
            ui.set_book_enabled(book_enabled);
        }
    }
}

/// [`HelloWorldView`] backed by the Slint `HelloWorldWindow`.
pub struct SlintHelloWorldView {
    ui: slint::Weak<HelloWorldWindow>,
}

impl SlintHelloWorldView {
    pub fn new(ui: &HelloWorldWindow) -> Self {
        Self { ui: ui.as_weak() }
    }
}

impl HelloWorldView for SlintHelloWorldView {
    fn update_count_label(&self, text: &str) {
        if let Some(ui) = self.ui.upgrade() {
            ui.set_count_label(text.into());
        }
    }
}

type SharedFlightBookerPresenter = Rc<RefCell<FlightBookerPresenter<SlintFlightBookerView>>>;
type SharedHelloWorldPresenter = Rc<RefCell<HelloWorldPresenter<SlintHelloWorldView>>>;

/// Flight booker window plus its presenter.
///
/// # Example
/// ```ignore
/// let runtime = tokio::runtime::Runtime::new()?;
/// let controller = FlightBookerController::new(&config, runtime.handle().clone(), metrics)?;
/// controller.run()?;  // Blocks until window is closed
/// ```
pub struct FlightBookerController {
    ui: FlightBookerWindow,
    presenter: SharedFlightBookerPresenter,
}

impl FlightBookerController {
    pub fn new(
        config: &AppConfig,
        tokio_handle: tokio::runtime::Handle,
        metrics: Arc<Metrics>,
    ) -> Result<Self> {
        let ui = FlightBookerWindow::new().context("Failed to create flight booker window")?;

        let ui_weak = ui.as_weak();
        let wake: WakeFn = Arc::new(move || {
            let result = ui_weak.upgrade_in_event_loop(|ui| ui.invoke_ui_messages_ready());
            if let Err(e) = result {
                tracing::warn!("Failed to queue booking result to event loop: {:?}", e);
            }
        });

        let presenter = FlightBookerPresenter::new(
            Arc::new(SimulatedBookingModel::new(config.flight_booker.clone())),
            SlintFlightBookerView::new(&ui),
            DateFormat::new(config.flight_booker.date_format.as_str()),
            tokio_handle,
            wake,
        )
        .with_metrics(metrics);

        // Pre-fill the entries with the model's initial dates
        let data = presenter.data();
        let format = presenter.date_format();
        if let Some(date) = data.start_date {
            ui.set_start_date(format.format(date).into());
        }
        if let Some(date) = data.return_date {
            ui.set_return_date(format.format(date).into());
        }

        let controller = Self {
            ui,
            presenter: Rc::new(RefCell::new(presenter)),
        };
        controller.set_handler();

        tracing::info!("Flight booker controller initialized");
        Ok(controller)
    }

    /// Connect window callbacks to the presenter.
    fn set_handler(&self) {
        let presenter = Rc::clone(&self.presenter);
        self.ui.on_flight_type_changed(move |one_way| {
            presenter.borrow_mut().on_flight_type_changed(one_way);
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_start_date_changed(move |text| {
            presenter.borrow_mut().on_start_date_changed(text.as_str());
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_return_date_changed(move |text| {
            presenter.borrow_mut().on_return_date_changed(text.as_str());
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_book_clicked(move || {
            tracing::debug!("Book button clicked");
            presenter.borrow_mut().on_book_clicked();
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_book_cancelled(move || {
            tracing::debug!("Booking dialog closed by the user");
            let mut presenter = presenter.borrow_mut();
            presenter.view().dialog_dismissed();
            presenter.on_book_cancelled();
        });

        let ui_weak = self.ui.as_weak();
        self.ui.on_message_dismissed(move || {
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_show_message_dialog(false);
            }
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_ui_messages_ready(move || {
            let applied = presenter.borrow_mut().process_ui_messages();
            tracing::trace!("Applied {} booking message(s)", applied);
        });

        tracing::debug!("Flight booker callbacks configured");
    }

    /// Push the initial form state into the freshly built window.
    pub fn on_activate(&self) {
        self.presenter.borrow_mut().on_built();
    }

    /// Run the GUI (blocks until window is closed)
    pub fn run(self) -> Result<(), slint::PlatformError> {
        self.on_activate();
        tracing::info!("Starting flight booker event loop");
        self.ui.run()
    }
}

/// Hello-world window plus its presenter.
pub struct HelloWorldController {
    ui: HelloWorldWindow,
    presenter: SharedHelloWorldPresenter,
}

impl HelloWorldController {
    pub fn new(
        config: &AppConfig,
        tokio_handle: tokio::runtime::Handle,
        metrics: Arc<Metrics>,
    ) -> Result<Self> {
        let ui = HelloWorldWindow::new().context("Failed to create hello world window")?;

        let ui_weak = ui.as_weak();
        let wake: WakeFn = Arc::new(move || {
            let result = ui_weak.upgrade_in_event_loop(|ui| ui.invoke_ui_messages_ready());
            if let Err(e) = result {
                tracing::warn!("Failed to queue greeting to event loop: {:?}", e);
            }
        });

        let presenter = HelloWorldPresenter::new(
            Arc::new(SimulatedGreetingModel::new(&config.hello_world)),
            SlintHelloWorldView::new(&ui),
            tokio_handle,
            wake,
        )
        .with_metrics(metrics);

        let controller = Self {
            ui,
            presenter: Rc::new(RefCell::new(presenter)),
        };
        controller.set_handler();

        tracing::info!("Hello world controller initialized");
        Ok(controller)
    }

    fn set_handler(&self) {
        let presenter = Rc::clone(&self.presenter);
        self.ui.on_say_hello_clicked(move || {
            presenter.borrow_mut().on_say_hello_clicked();
        });

        let presenter = Rc::clone(&self.presenter);
        self.ui.on_ui_messages_ready(move || {
            presenter.borrow_mut().process_ui_messages();
        });
    }

    pub fn on_activate(&self) {
        self.presenter.borrow_mut().on_activate();
    }

    /// Run the GUI (blocks until window is closed)
    pub fn run(self) -> Result<(), slint::PlatformError> {
        self.on_activate();
        tracing::info!("Starting hello world event loop");
        self.ui.run()
    }
}
