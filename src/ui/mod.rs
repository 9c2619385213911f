// UI module - presenters, views and the worker-to-UI bridge
//
// This module contains:
// - bridge: marshals worker results onto the UI thread
// - view: capability traits the presenters drive
// - presenter / hello: toolkit-free presenters of the two demos
// - controller: Slint windows implementing the views and wiring callbacks

pub mod bridge;
pub mod controller;
pub mod hello;
pub mod presenter;
pub mod view;

pub use bridge::{BridgeError, UiBridge, UiInbox, WakeFn, polled_ui_channel, ui_channel};
pub use controller::{FlightBookerController, HelloWorldController};
pub use hello::{CounterMessage, HelloWorldPresenter};
pub use presenter::{BOOKING_SUCCESS_TEXT, FlightBookerPresenter, drive_booking};
pub use view::{DialogHandle, FlightBookerView, HelloWorldView};
