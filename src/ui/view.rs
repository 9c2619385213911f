//! View capabilities consumed by the presenters.
//!
//! Presenters only ever call these from the UI thread. The Slint windows in
//! [`controller`](crate::ui::controller) implement them; tests use mocks or
//! recording fakes.

/// Token for a busy dialog shown while a booking runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DialogHandle(u64);

impl DialogHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait FlightBookerView {
    /// Show the modal "booking in progress" indicator.
    fn show_book_dialog(&self) -> DialogHandle;

    /// Remove a dialog returned by [`show_book_dialog`](Self::show_book_dialog).
    /// Must tolerate a dialog the user already closed.
    fn destroy_dialog(&self, dialog: DialogHandle);

    fn show_info(&self, text: &str);

    fn show_error(&self, text: &str);

    /// Reflect validation state into widget enablement.
    fn update(&self, return_date_enabled: bool, book_enabled: bool);
}

#[cfg_attr(test, mockall::automock)]
pub trait HelloWorldView {
    fn update_count_label(&self, text: &str);
}
