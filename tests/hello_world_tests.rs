//! Integration tests for the hello-world presenter

use booking_demos::models::HelloWorldSettings;
use booking_demos::services::SimulatedGreetingModel;
use booking_demos::ui::{HelloWorldPresenter, HelloWorldView};
use std::cell::RefCell;
use std::sync::Arc;

#[derive(Default)]
struct LabelView {
    labels: RefCell<Vec<String>>,
}

impl HelloWorldView for LabelView {
    fn update_count_label(&self, text: &str) {
        self.labels.borrow_mut().push(text.to_string());
    }
}

fn presenter(
    settings: HelloWorldSettings,
    runtime: &tokio::runtime::Runtime,
) -> HelloWorldPresenter<LabelView> {
    HelloWorldPresenter::new(
        Arc::new(SimulatedGreetingModel::new(&settings)),
        LabelView::default(),
        runtime.handle().clone(),
        Arc::new(|| {}),
    )
}

#[test]
fn test_clicks_return_immediately() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut presenter = presenter(HelloWorldSettings { delay_ms: 200, step: 1 }, &runtime);

    presenter.on_activate();
    let started = std::time::Instant::now();
    presenter.on_say_hello_clicked();
    assert!(started.elapsed() < std::time::Duration::from_millis(200));

    // Nothing applied until the UI thread processes the message
    assert_eq!(presenter.count(), 0);
    assert_eq!(presenter.in_flight(), 1);

    assert!(presenter.wait_for_ui_message());
    assert_eq!(presenter.count(), 1);
}

#[test]
fn test_several_clicks_accumulate() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut presenter = presenter(HelloWorldSettings { delay_ms: 5, step: 1 }, &runtime);

    presenter.on_activate();
    for _ in 0..3 {
        presenter.on_say_hello_clicked();
    }
    for _ in 0..3 {
        assert!(presenter.wait_for_ui_message());
    }

    assert_eq!(presenter.count(), 3);
    assert_eq!(presenter.in_flight(), 0);
    assert_eq!(
        *presenter.view().labels.borrow(),
        vec![
            "I've said hello 0 times".to_string(),
            "I've said hello 1 time".to_string(),
            "I've said hello 2 times".to_string(),
            "I've said hello 3 times".to_string(),
        ]
    );
}

#[test]
fn test_configured_step() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut presenter = presenter(HelloWorldSettings { delay_ms: 0, step: 5 }, &runtime);

    presenter.on_say_hello_clicked();
    assert!(presenter.wait_for_ui_message());

    assert_eq!(presenter.count(), 5);
    assert_eq!(
        presenter.view().labels.borrow().last().map(String::as_str),
        Some("I've said hello 5 times")
    );
}
